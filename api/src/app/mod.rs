//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and the HTTP handlers.

pub mod calculator_service;

pub use calculator_service::{CalculateRequest, CalculatorService};
