//! HTTP client for the calculator API

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Errors from a calculate call
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The API rejected the calculation; holds its `error` message verbatim
    #[error("{0}")]
    Calculation(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

/// HTTP client for communicating with the calculator API
#[derive(Clone)]
pub struct CalculatorClient {
    client: reqwest::Client,
    base_url: String,
}

impl CalculatorClient {
    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - CALCULATOR_API_URL: Base URL of the API (default http://localhost:5000)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("CALCULATOR_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST /calculate and return the numeric result
    pub async fn calculate(
        &self,
        num1: f64,
        num2: f64,
        operation: &str,
    ) -> Result<f64, ClientError> {
        let url = format!("{}/calculate", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&CalculateRequest {
                num1,
                num2,
                operation,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        interpret_reply(&body)
    }
}

/// Turn a `/calculate` response body into a result
fn interpret_reply(body: &str) -> Result<f64, ClientError> {
    let reply: CalculateReply = serde_json::from_str(body)
        .map_err(|e| ClientError::UnexpectedResponse(format!("{}: {}", e, body)))?;

    match reply {
        CalculateReply {
            error: Some(error), ..
        } => Err(ClientError::Calculation(error)),
        CalculateReply {
            result: Some(result),
            ..
        } => Ok(result),
        _ => Err(ClientError::UnexpectedResponse(body.to_string())),
    }
}

// --- Wire Types ---

#[derive(Debug, Serialize)]
struct CalculateRequest<'a> {
    num1: f64,
    num2: f64,
    operation: &'a str,
}

#[derive(Debug, Deserialize)]
struct CalculateReply {
    result: Option<f64>,
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new() {
        let client = CalculatorClient::new("http://calc.example.com").unwrap();
        assert_eq!(client.base_url(), "http://calc.example.com");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = CalculatorClient::new("http://calc.example.com/").unwrap();
        assert_eq!(client.base_url(), "http://calc.example.com");
    }

    #[test]
    fn test_calculate_request_serialization() {
        let req = CalculateRequest {
            num1: 6.0,
            num2: 3.0,
            operation: "/",
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"num1":6.0,"num2":3.0,"operation":"/"}"#);
    }

    #[test]
    fn test_interpret_result() {
        assert_eq!(interpret_reply(r#"{"result":2.0}"#).unwrap(), 2.0);
    }

    #[test]
    fn test_interpret_error_is_verbatim() {
        let err = interpret_reply(r#"{"error":"Division by zero is not possible"}"#).unwrap_err();
        assert!(matches!(err, ClientError::Calculation(_)));
        assert_eq!(err.to_string(), "Division by zero is not possible");
    }

    #[test]
    fn test_interpret_empty_object() {
        let err = interpret_reply("{}").unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedResponse(_)));
    }

    #[test]
    fn test_interpret_non_json() {
        let err = interpret_reply("<html>").unwrap_err();
        assert!(matches!(err, ClientError::UnexpectedResponse(_)));
    }
}
