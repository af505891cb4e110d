//! Input adapters: keyboard keys and keypad buttons to calculator events
//!
//! Adapters only translate. Anything they cannot map is dropped here and
//! never reaches the [`Calculator`].

pub mod keyboard;
pub mod keypad;

pub use keyboard::{key_to_event, KeyScript};
pub use keypad::{ButtonAction, ButtonBinding, Keypad, KeypadButton};

use crate::core::{Calculator, DigitKey, Operator, Outcome};

/// A normalized calculator event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalcEvent {
    /// Digit or decimal point
    Digit(DigitKey),
    /// Binary operator
    Operator(Operator),
    /// Evaluate (`=`)
    Equals,
    /// Reset everything
    Clear,
    /// Remove the last typed character
    DeleteLast,
}

impl CalcEvent {
    /// Short label used in logs and traces
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(key) => key.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::DeleteLast => "DEL".to_string(),
        }
    }

    /// Runs the matching handler on `calc`
    pub fn apply(self, calc: &mut Calculator) -> Outcome {
        match self {
            Self::Digit(key) => calc.input_digit(key),
            Self::Operator(op) => calc.choose_operator(op),
            Self::Equals => calc.compute(),
            Self::Clear => calc.clear(),
            Self::DeleteLast => calc.delete_last(),
        }
    }
}

impl From<DigitKey> for CalcEvent {
    fn from(key: DigitKey) -> Self {
        Self::Digit(key)
    }
}

impl From<Operator> for CalcEvent {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
