//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pocketcalc: a pocket calculator for the terminal
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Calculator settings file (YAML)
    #[arg(long, global = true, env = "POCKETCALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive calculator
    Run(RunArgs),

    /// Evaluate a key script and print the display
    ///
    /// Each character is one key: digits, `.`, `+ - * / %`, `=`, and
    /// `c` for clear. `<BS>` deletes the last character and `<CR>` is
    /// the same as `=`. Whitespace is ignored.
    Eval(EvalArgs),

    /// Show the effective calculator settings
    Config(ConfigArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Override the display width
    #[arg(long)]
    pub width: Option<usize>,
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Key script, e.g. "12+7="
    pub script: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the screen after every key
    #[arg(long)]
    pub trace: bool,

    /// Fail when the script contains unmapped keys
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: ConfigFormat,
}

/// Settings output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    /// YAML, loadable with --config
    #[default]
    Yaml,
    /// JSON
    Json,
}
