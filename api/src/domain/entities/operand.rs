//! Operand coercion
//!
//! Request fields arrive untyped. Numbers are taken as-is, numeric strings are
//! parsed, booleans count as 1 and 0, and a missing field counts as 0.

use serde_json::Value;

use crate::error::CalcError;

/// Coerce a request field to `f64`
pub fn parse_operand(value: Option<&Value>) -> Result<f64, CalcError> {
    match value {
        None => Ok(0.0),
        Some(Value::Number(n)) => n
            .as_f64()
            .ok_or_else(|| CalcError::InvalidNumber(n.to_string())),
        Some(Value::String(s)) => parse_numeric_str(s),
        Some(Value::Bool(b)) => Ok(if *b { 1.0 } else { 0.0 }),
        Some(other) => Err(CalcError::InvalidNumber(other.to_string())),
    }
}

/// Parse a float from text, ignoring surrounding whitespace.
///
/// Accepts `inf`, `infinity` and `nan` in any case.
pub fn parse_numeric_str(input: &str) -> Result<f64, CalcError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CalcError::InvalidNumber(input.to_string()));
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidNumber(input.to_string()))
}
