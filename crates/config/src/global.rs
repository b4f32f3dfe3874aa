//! Process-wide configuration values.
//!
//! Responsibilities:
//! - Fix the credential and the base directory once per process.
//! - Provide the startup routine (`init`, `init_with`, `install`).
//! - Provide lazy accessors for consumers that never ran the startup routine.
//!
//! Does NOT handle:
//! - Source resolution (see `loader`).
//!
//! Invariants:
//! - Each value is written at most once; later writes are discarded with a warning.
//! - The base directory reflects the working directory at first computation,
//!   not at the time of any later read.
//! - The credential is never logged.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use secrecy::{ExposeSecret, SecretString};
use tracing::{info, warn};

use crate::loader::{ConfigError, SettingsLoader, base_directory_from_cwd};
use crate::settings::Settings;

static API_KEY: OnceLock<SecretString> = OnceLock::new();
static BASE_DIRECTORY: OnceLock<PathBuf> = OnceLock::new();

/// Load settings from the standard stack and fix them for the process.
///
/// Call this once at startup, before spawning threads that read the values.
///
/// # Errors
///
/// Fails if the working directory is unavailable or a discovered `.env`
/// file cannot be read.
pub fn init() -> Result<Settings, ConfigError> {
    init_with(SettingsLoader::standard()?)
}

/// Build settings from `loader` and fix them for the process.
pub fn init_with(loader: SettingsLoader) -> Result<Settings, ConfigError> {
    Ok(install(loader.build()?))
}

/// Fix `settings` as the process-wide values.
///
/// Values that were already fixed are kept; the returned `Settings` holds the
/// effective process-wide values.
pub fn install(settings: Settings) -> Settings {
    let api_key = settings.api_key().clone();
    let base_dir = settings.base_dir().to_path_buf();

    let mut installed_key = false;
    let effective_key = API_KEY.get_or_init(|| {
        installed_key = true;
        api_key.clone()
    });
    if !installed_key && effective_key.expose_secret() != api_key.expose_secret() {
        warn!("API key already initialized for this process; keeping the existing value");
    }

    let mut installed_dir = false;
    let effective_dir = BASE_DIRECTORY.get_or_init(|| {
        installed_dir = true;
        base_dir.clone()
    });
    if !installed_dir && *effective_dir != base_dir {
        warn!(
            existing = %effective_dir.display(),
            discarded = %base_dir.display(),
            "base directory already initialized for this process; keeping the existing value"
        );
    }

    if installed_key || installed_dir {
        info!(
            base_dir = %effective_dir.display(),
            api_key_set = !effective_key.expose_secret().is_empty(),
            "configuration initialized"
        );
    }

    Settings::new(effective_key.clone(), effective_dir.clone())
}

/// The process-wide API credential, or the empty string if none is configured.
///
/// Resolved on first use from the standard stack when `init` was not called.
/// Unparseable `.env` lines are skipped; a `.env` file that cannot be read
/// degrades to the process environment alone.
pub fn get_api_key() -> &'static str {
    API_KEY.get_or_init(lazy_api_key).expose_secret()
}

/// The process-wide base directory: the parent of the working directory at
/// first computation.
///
/// # Errors
///
/// Returns `ConfigError::WorkingDirUnavailable` if the base directory has not
/// been fixed yet and the working directory cannot be read.
pub fn get_base_directory() -> Result<&'static Path, ConfigError> {
    if let Some(dir) = BASE_DIRECTORY.get() {
        return Ok(dir.as_path());
    }
    let dir = base_directory_from_cwd()?;
    Ok(BASE_DIRECTORY.get_or_init(|| dir).as_path())
}

fn lazy_api_key() -> SecretString {
    match SettingsLoader::standard() {
        Ok(loader) => loader.resolve_api_key(),
        Err(e) => {
            warn!(error = %e, "falling back to the process environment for the API key");
            SettingsLoader::new().from_env().resolve_api_key()
        }
    }
}
