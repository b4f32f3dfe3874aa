//! naive-rag - Inspect the runtime configuration of the naive-rag application.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Run the configuration startup routine exactly once.
//! - Report the effective configuration without revealing the API key.
//!
//! Does NOT handle:
//! - Source resolution or base directory computation (see `crates/config`).
//!
//! Invariants:
//! - Logging goes to stderr so stdout stays machine-readable.
//! - Startup failures exit with code 1 before any command runs.

mod args;
mod commands;
mod error;

use args::Cli;
use clap::Parser;
use commands::run_command;
use error::{ExitCode, ExitCodeExt};
use naive_rag_config::{ConfigError, SettingsLoader};
use std::io::Write;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = match build_loader(&cli).and_then(naive_rag_config::init_with) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let mut stdout = std::io::stdout().lock();
    let exit_code = match run_command(cli.command, &settings, cli.json, &mut stdout) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };
    let _ = stdout.flush();

    std::process::exit(exit_code.as_i32());
}

/// Assemble the loader: process environment first, then the `.env` file
/// unless disabled on the command line.
fn build_loader(cli: &Cli) -> Result<SettingsLoader, ConfigError> {
    let mut loader = SettingsLoader::new().from_env();
    if cli.no_env_file {
        return Ok(loader);
    }
    if let Some(ref path) = cli.env_file {
        loader = loader.with_env_file(path.clone());
    }
    loader.load_env_file()
}
