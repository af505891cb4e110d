//! CLI configuration

use crate::error::{CliError, CliResult};
use pocketcalc::config::CalculatorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Maps `-q` and the `-v` count to a level
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Calculator limits
    pub calculator: CalculatorConfig,
    /// File the calculator limits were loaded from
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set calculator limits
    #[must_use]
    pub fn with_calculator(mut self, calculator: CalculatorConfig) -> Self {
        self.calculator = calculator;
        self
    }

    /// Loads calculator limits from a YAML file, or keeps the defaults
    pub fn load(mut self, path: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = path {
            self.calculator = load_calculator_config(path)?;
            self.source = Some(path.to_path_buf());
        }
        Ok(self)
    }
}

/// Reads and validates a calculator config file
pub fn load_calculator_config(path: &Path) -> CliResult<CalculatorConfig> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        CliError::config(format!("cannot read {}: {e}", path.display()))
    })?;
    parse_calculator_config(&text)
}

/// Parses and validates calculator settings from YAML text
///
/// An empty document yields the defaults.
pub fn parse_calculator_config(text: &str) -> CliResult<CalculatorConfig> {
    let config = if text.trim().is_empty() {
        CalculatorConfig::default()
    } else {
        serde_yaml_ng::from_str::<CalculatorConfig>(text)?
    };
    config.validate()?;
    Ok(config)
}

/// Renders calculator settings as YAML
pub fn render_calculator_config(config: &CalculatorConfig) -> CliResult<String> {
    Ok(serde_yaml_ng::to_string(config)?)
}
