//! pocketcalc: a pocket calculator for the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc run                    # Interactive keypad
//! pocketcalc eval "12+7="           # Prints the expression and result
//! pocketcalc eval "9/0=" --trace    # Screen after every key
//! pocketcalc --config calc.yaml config
//! ```

use clap::Parser;
use pocketcalc_cli::{
    evaluate, logging, render_calculator_config, run_interactive, Cli, CliConfig, CliError,
    CliResult, Commands, ConfigArgs, ConfigFormat, EvalArgs, RunArgs, Verbosity,
};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();

    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    logging::init(verbosity)?;

    let config = CliConfig::new()
        .with_verbosity(verbosity)
        .load(cli.config.as_deref())?;
    debug!(source = ?config.source, settings = ?config.calculator, "configuration loaded");

    match cli.command {
        Commands::Run(args) => run_calculator(config, &args),
        Commands::Eval(args) => run_eval(config, &args),
        Commands::Config(args) => run_config(&config, &args),
    }
}

fn run_calculator(config: CliConfig, args: &RunArgs) -> CliResult<()> {
    let mut settings = config.calculator;
    if let Some(width) = args.width {
        settings = settings.with_display_width(width);
        settings.validate()?;
    }
    run_interactive(settings)
}

fn run_eval(config: CliConfig, args: &EvalArgs) -> CliResult<()> {
    let report = evaluate(&args.script, config.calculator, args.trace);

    if args.strict && !report.skipped.is_empty() {
        return Err(CliError::invalid_argument(format!(
            "unmapped keys in script: {}",
            report.skipped.join(", ")
        )));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}

fn run_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    if config.verbosity.is_verbose() {
        match &config.source {
            Some(path) => eprintln!("# loaded from {}", path.display()),
            None => eprintln!("# built-in defaults"),
        }
    }

    match args.format {
        ConfigFormat::Yaml => print!("{}", render_calculator_config(&config.calculator)?),
        ConfigFormat::Json => println!("{}", serde_json::to_string_pretty(&config.calculator)?),
    }
    Ok(())
}
