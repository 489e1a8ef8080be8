//! Test utilities
//!
//! Fixtures for exercising the router in-process. There are no external
//! dependencies to mock: the calculator service is pure.

pub mod fixtures;

pub use fixtures::*;
