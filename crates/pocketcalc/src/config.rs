//! Calculator configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A width or digit count that must be positive was zero
    #[error("{field} must be greater than zero")]
    Zero {
        /// Offending field name
        field: &'static str,
    },

    /// Precision above what the formatter supports
    #[error("expr_precision must be at most {max}, got {value}")]
    PrecisionTooLarge {
        /// Requested precision
        value: usize,
        /// Supported maximum
        max: usize,
    },

    /// The error token would be rendered as nothing
    #[error("error_token must not be empty")]
    EmptyErrorToken,
}

/// Display and formatting limits of a [`Calculator`](crate::core::Calculator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Maximum number of buffer characters rendered on the display
    pub display_width: usize,
    /// Operand text longer than this is shortened in the expression line
    pub expr_max_len: usize,
    /// Significant digits used when an operand is shortened
    pub expr_precision: usize,
    /// Text shown in place of the buffer on division by zero
    pub error_token: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            display_width: Self::DEFAULT_DISPLAY_WIDTH,
            expr_max_len: Self::DEFAULT_EXPR_MAX_LEN,
            expr_precision: Self::DEFAULT_EXPR_PRECISION,
            error_token: Self::DEFAULT_ERROR_TOKEN.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Default display width in characters
    pub const DEFAULT_DISPLAY_WIDTH: usize = 16;
    /// Default expression operand length limit
    pub const DEFAULT_EXPR_MAX_LEN: usize = 16;
    /// Default significant digits for shortened operands
    pub const DEFAULT_EXPR_PRECISION: usize = 10;
    /// Default division-by-zero token
    pub const DEFAULT_ERROR_TOKEN: &'static str = "Error";

    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display width
    #[must_use]
    pub const fn with_display_width(mut self, width: usize) -> Self {
        self.display_width = width;
        self
    }

    /// Set expression operand length limit
    #[must_use]
    pub const fn with_expr_max_len(mut self, len: usize) -> Self {
        self.expr_max_len = len;
        self
    }

    /// Set significant digits for shortened operands
    #[must_use]
    pub const fn with_expr_precision(mut self, digits: usize) -> Self {
        self.expr_precision = digits;
        self
    }

    /// Set division-by-zero token
    #[must_use]
    pub fn with_error_token(mut self, token: impl Into<String>) -> Self {
        self.error_token = token.into();
        self
    }

    /// Checks every limit is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display_width == 0 {
            return Err(ConfigError::Zero {
                field: "display_width",
            });
        }
        if self.expr_max_len == 0 {
            return Err(ConfigError::Zero {
                field: "expr_max_len",
            });
        }
        if self.expr_precision == 0 {
            return Err(ConfigError::Zero {
                field: "expr_precision",
            });
        }
        if self.expr_precision > crate::core::format::MAX_PRECISION {
            return Err(ConfigError::PrecisionTooLarge {
                value: self.expr_precision,
                max: crate::core::format::MAX_PRECISION,
            });
        }
        if self.error_token.is_empty() {
            return Err(ConfigError::EmptyErrorToken);
        }
        Ok(())
    }
}
