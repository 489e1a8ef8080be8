//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod calculate;
pub mod page;

pub use calculate::calculate;
pub use page::{index, script, stylesheet};
