//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Operators, operand coercion and calculation values
//!
//! Domain errors live in `crate::error::CalcError`.

pub mod entities;
