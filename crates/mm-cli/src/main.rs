//! # mm CLI entry point
//!
//! Parses command-line arguments, loads the optional config, installs the
//! tracing subscriber, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mm_cli::complete::{run_complete, CompleteArgs};
use mm_cli::date::{run_date, DateArgs};
use mm_cli::validate::{run_validate, ValidateArgs};
use mm_cli::{CliConfig, LogFormat, EXIT_FAILURE};

/// MicroMasters profile validator.
///
/// Validates learner profile documents section by section, checks whole
/// profiles for completeness, and exercises the date-input field.
#[derive(Parser, Debug)]
#[command(name = "mm", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reference date for date rules (YYYY-MM-DD). Overrides the config.
    #[arg(long, global = true)]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a profile document and print the error tree.
    Validate(ValidateArgs),

    /// Check a profile for completeness and print the first failing step.
    Complete(CompleteArgs),

    /// Run date fragments through a date field and print its state.
    Date(DateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = CliConfig::load(cli.config.as_deref());
    let log_format = config
        .as_ref()
        .map(|c| c.log_format)
        .unwrap_or_default();
    init_tracing(cli.verbose, log_format);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(EXIT_FAILURE);
        }
    };
    let today = config.reference_date(cli.today);
    tracing::debug!(%today, "mm CLI starting");

    let mut stdout = std::io::stdout().lock();
    let result = match &cli.command {
        Commands::Validate(args) => run_validate(args, today, &mut stdout),
        Commands::Complete(args) => run_complete(args, today, &mut stdout),
        Commands::Date(args) => run_date(args, &mut stdout),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
