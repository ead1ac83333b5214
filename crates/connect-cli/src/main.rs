//! # connect CLI entry point
//!
//! Parses command-line arguments, initializes tracing and dispatches to the
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use connect_cli::check::{run_check, CheckArgs};
use connect_cli::config::{CliConfig, LogFormat};
use connect_cli::models::{run_models, ModelsArgs};
use connect_cli::EXIT_OPERATIONAL_ERROR;

/// Check documents against the Connect API models.
#[derive(Parser, Debug)]
#[command(name = "connect", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a JSON or YAML document against a model.
    Check(CheckArgs),

    /// List the available models.
    Models(ModelsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CliConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(EXIT_OPERATIONAL_ERROR);
        }
    };
    init_tracing(cli.verbose, config.log_format);

    tracing::debug!(?config, "connect CLI starting");

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, &config),
        Commands::Models(args) => run_models(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_OPERATIONAL_ERROR)
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
fn init_tracing(verbose: u8, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
