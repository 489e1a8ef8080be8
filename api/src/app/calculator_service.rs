//! Calculator service
//!
//! Turns an untyped calculate request into a validated calculation and runs it.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::entities::{parse_operand, Calculation, CalculationInput, Operation};
use crate::error::CalcError;

/// Raw calculate request as posted by the page.
///
/// Fields stay untyped until `CalculatorService::parse` coerces them. A field
/// that is present but `null` is `Some(Value::Null)`, distinct from a missing
/// field (`None`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CalculateRequest {
    #[serde(default, deserialize_with = "present")]
    pub num1: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub num2: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub operation: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Service for evaluating two-operand calculations
#[derive(Debug, Default, Clone)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Coerce request fields into a calculation input.
    ///
    /// Operands are checked before the operator, so `{"num1": "abc",
    /// "operation": "%"}` reports the number format error.
    pub fn parse(&self, request: &CalculateRequest) -> Result<CalculationInput, CalcError> {
        let num1 = parse_operand(request.num1.as_ref())?;
        let num2 = parse_operand(request.num2.as_ref())?;

        let operation = match &request.operation {
            None => Operation::default(),
            Some(Value::String(symbol)) => symbol.parse()?,
            Some(other) => return Err(CalcError::UnknownOperation(other.to_string())),
        };

        Ok(CalculationInput::new(num1, num2, operation))
    }

    /// Run a validated calculation
    pub fn calculate(&self, input: CalculationInput) -> Result<Calculation, CalcError> {
        let result = input.operation.apply(input.num1, input.num2)?;

        // JSON has no representation for infinities or NaN
        if !result.is_finite() {
            return Err(CalcError::NonFinite);
        }

        tracing::debug!(%input, result, "Calculated");

        Ok(Calculation { input, result })
    }

    /// Parse and run in one step
    pub fn evaluate(&self, request: &CalculateRequest) -> Result<Calculation, CalcError> {
        let input = self.parse(request)?;
        self.calculate(input)
    }
}
