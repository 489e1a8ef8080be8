//! Test fixtures
//!
//! Factory functions for building app state, routers and request bodies.

use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use serde_json::{json, Value};

use crate::app::CalculatorService;
use crate::config::Config;
use crate::{build_router, AppState};

/// Create app state with a fresh calculator service
pub fn test_state() -> AppState {
    AppState {
        calculator_service: Arc::new(CalculatorService::new()),
    }
}

/// Create a router with default config
pub fn test_router() -> Router {
    build_router(test_state(), &Config::default())
}

/// Create an in-process test server around the full router
pub fn test_server() -> TestServer {
    TestServer::new(test_router()).unwrap()
}

/// Build a calculate request body
pub fn calc_body(num1: impl Into<Value>, num2: impl Into<Value>, operation: &str) -> Value {
    json!({
        "num1": num1.into(),
        "num2": num2.into(),
        "operation": operation,
    })
}
