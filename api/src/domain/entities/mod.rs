//! Domain entities
//!
//! Pure value types for a single calculation request.

pub mod calculation;
pub mod operand;
pub mod operation;

pub use calculation::{Calculation, CalculationInput};
pub use operand::parse_operand;
pub use operation::Operation;
