//! Calculator core: arithmetic, number formatting and the keypad state machine.
//!
//! Everything in here is synchronous and allocation-light. A [`Calculator`]
//! is an owned value; nothing is shared between instances.

pub mod format;
pub mod machine;
mod operations;

pub use machine::{Calculator, DigitKey, InvalidDigit, Outcome, Phase};
pub use operations::Operator;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
///
/// Only a division with a zero right operand is an error. Every other
/// IEEE-754 outcome (overflow to infinity, NaN from `%` by zero) is a value
/// the display can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
}
