//! Binary operators and their arithmetic

use crate::core::{CalcError, CalcResult};

/// Type-safe operator enum - the five keys a pending operation can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Truncating remainder (%)
    Modulo,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 5] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Modulo,
    ];

    /// Parses the raw operator character used by key events and button data
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// Returns the raw operator character
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Modulo => '%',
        }
    }

    /// Returns the symbol shown in the expression line
    ///
    /// Multiplication and division use their typographic signs; the rest
    /// are shown as typed.
    #[must_use]
    pub const fn display_symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Modulo => "%",
        }
    }

    /// Applies the operator to `x` and `y`
    ///
    /// Only [`Operator::Divide`] rejects a zero right operand (either sign).
    /// [`Operator::Modulo`] by zero yields NaN.
    pub fn apply(&self, x: f64, y: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(x + y),
            Self::Subtract => Ok(x - y),
            Self::Multiply => Ok(x * y),
            Self::Divide => {
                if y == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(x / y)
            }
            Self::Modulo => Ok(x % y),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_symbol())
    }
}
