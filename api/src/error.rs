//! Unified error types for the calculator API
//!
//! This module defines error types for each layer:
//! - `CalcError`: Arithmetic and input-coercion errors from the domain
//! - `ConfigError`: Startup configuration errors
//! - `AppError`: Application layer errors (wraps domain errors for HTTP responses)
//!
//! Every `AppError` is reported to the caller as `200 {"error": "..."}`.
//! The page script reads the `error` field and never looks at the status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain layer errors - the `Display` text is what the user sees
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// An operand could not be coerced to a float. Holds the offending input.
    #[error("Please enter valid numbers")]
    InvalidNumber(String),

    #[error("Division by zero is not possible")]
    DivisionByZero,

    /// Holds the rejected operator symbol.
    #[error("Unknown operation")]
    UnknownOperation(String),

    /// Finite operands overflowed to infinity or NaN.
    #[error("An error occurred: result is not a finite number")]
    NonFinite,
}

/// Configuration errors, raised once at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Calc(#[from] CalcError),

    #[error("An error occurred: {0}")]
    BadRequest(String),

    #[error("An error occurred: {0}")]
    Internal(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Calc(CalcError::NonFinite) => {
                tracing::warn!("Calculation overflowed");
            }
            AppError::Calc(e) => {
                tracing::debug!(error = ?e, "Rejected calculation");
            }
            AppError::BadRequest(msg) => {
                tracing::debug!("Malformed request: {}", msg);
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (StatusCode::OK, body).into_response()
    }
}
