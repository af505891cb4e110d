//! pocketcalc CLI library
//!
//! Command-line and terminal front ends for the `pocketcalc` state machine.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::format_push_string)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod eval;
pub mod input;
pub mod logging;
pub mod terminal;

pub use commands::{Cli, Commands, ConfigArgs, ConfigFormat, EvalArgs, RunArgs};
pub use config::{
    load_calculator_config, parse_calculator_config, render_calculator_config, CliConfig,
    Verbosity,
};
pub use error::{CliError, CliResult};
pub use eval::{evaluate, EvalReport, Step};
pub use input::{handle_key, KeyCommand};
pub use terminal::{run_interactive, TerminalSink};
