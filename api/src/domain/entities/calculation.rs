//! Calculation domain entity

use serde::{Deserialize, Serialize};

use super::Operation;

/// Validated inputs of a single calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub num1: f64,
    pub num2: f64,
    pub operation: Operation,
}

impl CalculationInput {
    pub fn new(num1: f64, num2: f64, operation: Operation) -> Self {
        Self {
            num1,
            num2,
            operation,
        }
    }
}

impl std::fmt::Display for CalculationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.num1, self.operation, self.num2)
    }
}

/// A completed calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub input: CalculationInput,
    pub result: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_reads_as_expression() {
        let input = CalculationInput::new(6.0, 3.5, Operation::Divide);
        assert_eq!(input.to_string(), "6 / 3.5");
    }
}
