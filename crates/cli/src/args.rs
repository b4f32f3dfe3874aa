//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not load configuration (see `main`).
//! - Does not execute commands (see `commands` module).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "naive-rag")]
#[command(about = "Inspect the naive-rag runtime configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  naive-rag show\n  naive-rag --json show\n  naive-rag base-dir\n  naive-rag --env-file ./prod.env check\n"
)]
pub struct Cli {
    /// Load this .env file instead of searching upward from the working directory
    #[arg(long, global = true, conflicts_with = "no_env_file")]
    pub env_file: Option<PathBuf>,

    /// Do not load any .env file
    #[arg(long, global = true)]
    pub no_env_file: bool,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Show the effective configuration (the API key itself is never printed)
    Show,
    /// Print the base directory
    BaseDir,
    /// Fail unless an API key is configured
    Check,
}
