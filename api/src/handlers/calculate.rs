//! Calculate handler
//!
//! The single JSON endpoint behind the calculator page.

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::app::CalculateRequest;
use crate::error::AppError;
use crate::AppState;

/// Response body for a successful calculation
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculateResponse {
    pub result: f64,
}

/// POST /calculate
///
/// Accepts `{num1, num2, operation}` and returns `{result}` or `{error}`.
/// The body is read as JSON regardless of its content type.
pub async fn calculate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CalculateResponse>, AppError> {
    let request = parse_request(&body)?;

    let calculation = state.calculator_service.evaluate(&request)?;

    Ok(Json(CalculateResponse {
        result: calculation.result,
    }))
}

fn parse_request(body: &[u8]) -> Result<CalculateRequest, AppError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    if !value.is_object() {
        return Err(AppError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_request_valid() {
        let request = parse_request(br#"{"num1": 6, "num2": 3, "operation": "/"}"#).unwrap();
        assert_eq!(request.num1, Some(serde_json::json!(6)));
        assert_eq!(request.operation, Some(serde_json::json!("/")));
    }

    #[test]
    fn parse_request_rejects_invalid_json() {
        let err = parse_request(b"num1=6&num2=3").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn parse_request_rejects_empty_body() {
        assert!(matches!(
            parse_request(b"").unwrap_err(),
            AppError::BadRequest(_)
        ));
    }

    #[test]
    fn parse_request_rejects_non_object() {
        let err = parse_request(br#"[6, 3, "/"]"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "An error occurred: request body must be a JSON object"
        );
    }

    #[test]
    fn serialize_calculate_response() {
        let json = serde_json::to_string(&CalculateResponse { result: 2.0 }).unwrap();
        assert_eq!(json, r#"{"result":2.0}"#);
    }
}
