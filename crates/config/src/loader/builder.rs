//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` that stacks configuration sources.
//! - Resolve the credential with override > source layers > default.
//! - Compute the base directory from the working directory.
//!
//! Does NOT handle:
//! - Process-wide storage of the result (see `global`).
//! - Parsing `.env` files (delegated to `source::DotenvSource`).
//!
//! Invariants / Assumptions:
//! - Layers are consulted in the order they were added; the first hit wins.
//! - `standard()` adds the process environment before the `.env` file, so the
//!   environment takes precedence over the file.
//! - The `DOTENV_DISABLED` variable is checked before any `.env` file is read.
//! - Credential lookup never fails; a missing key resolves to `DEFAULT_API_KEY`.

use secrecy::SecretString;
use std::path::PathBuf;
use tracing::debug;

use super::error::ConfigError;
use crate::constants::{API_KEY_VAR, DEFAULT_API_KEY, DOTENV_DISABLED_VAR};
use crate::settings::{Settings, base_directory_of};
use crate::source::{ConfigSource, DotenvSource, EnvSource, LayeredSource};

/// Builds [`Settings`] from stacked configuration sources.
#[derive(Debug, Default)]
pub struct SettingsLoader {
    sources: LayeredSource,
    api_key: Option<SecretString>,
    working_dir: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

impl SettingsLoader {
    /// Create a loader with no sources.
    pub fn new() -> Self {
        Self::default()
    }

    /// The production stack: process environment, then the nearest `.env` file.
    ///
    /// # Errors
    ///
    /// Fails if a discovered `.env` file cannot be read, or if the working
    /// directory needed for discovery is unavailable.
    pub fn standard() -> Result<Self, ConfigError> {
        Self::new().from_env().load_env_file()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Add the process environment as the next source layer.
    pub fn from_env(mut self) -> Self {
        self.sources.push(EnvSource);
        self
    }

    /// Add an arbitrary source as the next layer.
    pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
        self.sources.push(source);
        self
    }

    /// Use this `.env` file instead of discovering one.
    pub fn with_env_file(mut self, path: PathBuf) -> Self {
        self.env_file = Some(path);
        self
    }

    /// Add a `.env` file as the next source layer.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", nothing is loaded.
    /// Without an explicit path, the nearest `.env` at or above the working
    /// directory is used; finding none is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read (`ConfigError::DotenvIo`), including an
    ///   explicit path that does not exist
    /// - Discovery needs the process working directory and it is unavailable
    ///
    /// Lines with invalid syntax are skipped; the rest of the file still loads.
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_env_file(mut self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            debug!("dotenv loading disabled");
            return Ok(self);
        }

        let path = match self.env_file.clone() {
            Some(path) => path,
            None => {
                let start = self.working_dir()?;
                match DotenvSource::discover(&start) {
                    Some(path) => path,
                    None => {
                        debug!(start = %start.display(), "no .env file found");
                        return Ok(self);
                    }
                }
            }
        };

        self.sources.push(DotenvSource::from_path(&path)?);
        Ok(self)
    }

    /// Set the credential directly. Takes precedence over every source.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Compute the base directory from `dir` instead of the process working directory.
    pub fn with_working_dir(mut self, dir: PathBuf) -> Self {
        self.working_dir = Some(dir);
        self
    }

    /// Resolve the credential without failing.
    pub fn resolve_api_key(&self) -> SecretString {
        if let Some(key) = &self.api_key {
            return key.clone();
        }
        let value = self
            .sources
            .get(API_KEY_VAR)
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        SecretString::new(value.into())
    }

    /// Resolve the base directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WorkingDirUnavailable` if no working directory was
    /// set and the process working directory cannot be read.
    pub fn resolve_base_dir(&self) -> Result<PathBuf, ConfigError> {
        Ok(base_directory_of(&self.working_dir()?))
    }

    /// Build the final settings.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let base_dir = self.resolve_base_dir()?;
        let api_key = self.resolve_api_key();
        debug!(
            sources = ?self.sources.layer_names(),
            base_dir = %base_dir.display(),
            "built settings"
        );
        Ok(Settings::new(api_key, base_dir))
    }

    /// Names of the configured source layers, highest precedence first.
    pub fn source_names(&self) -> Vec<&str> {
        self.sources.layer_names()
    }

    fn working_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.working_dir {
            Some(dir) => Ok(dir.clone()),
            None => current_dir(),
        }
    }
}

/// Read the process working directory.
pub(crate) fn current_dir() -> Result<PathBuf, ConfigError> {
    std::env::current_dir().map_err(ConfigError::WorkingDirUnavailable)
}

/// Base directory for the process working directory.
pub(crate) fn base_directory_from_cwd() -> Result<PathBuf, ConfigError> {
    current_dir().map(|cwd| base_directory_of(&cwd))
}
