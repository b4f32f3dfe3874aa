//! Command implementations.
//!
//! Responsibilities:
//! - Render the effective configuration as text or JSON.
//!
//! Invariants:
//! - The API key value is never written to any output; only whether it is set
//!   and its length.

use std::io::Write;

use anyhow::Context;
use naive_rag_config::Settings;
use naive_rag_config::constants::API_KEY_VAR;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::args::Commands;
use crate::error::CliError;

/// What `show` reports about the loaded configuration.
#[derive(Debug, Serialize)]
pub struct ConfigReport {
    pub base_dir: String,
    pub api_key_var: &'static str,
    pub api_key_set: bool,
    pub api_key_length: usize,
}

impl ConfigReport {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            base_dir: settings.base_dir().display().to_string(),
            api_key_var: API_KEY_VAR,
            api_key_set: settings.has_api_key(),
            api_key_length: settings.api_key().expose_secret().chars().count(),
        }
    }
}

/// Run `command` against already-loaded settings, writing results to `out`.
pub fn run_command(
    command: Commands,
    settings: &Settings,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    match command {
        Commands::Show => show(settings, json, out),
        Commands::BaseDir => base_dir(settings, json, out),
        Commands::Check => check(settings, json, out),
    }
}

fn show(settings: &Settings, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let report = ConfigReport::from_settings(settings);
    if json {
        serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write JSON")?;
        writeln!(out)?;
        return Ok(());
    }

    let key_status = if report.api_key_set {
        format!("set ({} chars)", report.api_key_length)
    } else {
        "not set".to_string()
    };
    writeln!(out, "base_dir: {}", report.base_dir)?;
    writeln!(out, "{}: {}", report.api_key_var, key_status)?;
    Ok(())
}

fn base_dir(settings: &Settings, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    if json {
        let value = serde_json::json!({ "base_dir": settings.base_dir() });
        serde_json::to_writer(&mut *out, &value).context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", settings.base_dir().display())?;
    }
    Ok(())
}

fn check(settings: &Settings, json: bool, out: &mut impl Write) -> anyhow::Result<()> {
    let api_key_set = settings.has_api_key();
    if json {
        let value = serde_json::json!({ "api_key_set": api_key_set });
        serde_json::to_writer(&mut *out, &value).context("Failed to write JSON")?;
        writeln!(out)?;
    } else if api_key_set {
        writeln!(out, "{API_KEY_VAR} is set")?;
    }
    if !api_key_set {
        return Err(CliError::MissingApiKey.into());
    }
    Ok(())
}
