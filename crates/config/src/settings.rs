//! Resolved configuration values.
//!
//! Responsibilities:
//! - Hold the credential and base directory as one immutable value.
//! - Compute the base directory from a working directory.
//!
//! Does NOT handle:
//! - Reading any source (see `loader`).
//! - Process-wide storage (see `global`).
//!
//! Invariants:
//! - `Debug` output never contains the credential.
//! - The base directory is the parent of the directory it was computed from,
//!   or that directory itself when it has no parent.

use std::path::{Path, PathBuf};

use secrecy::{ExposeSecret, SecretString};

/// The credential and base directory handed to collaborators.
#[derive(Debug, Clone)]
pub struct Settings {
    api_key: SecretString,
    base_dir: PathBuf,
}

impl Settings {
    pub fn new(api_key: SecretString, base_dir: PathBuf) -> Self {
        Self { api_key, base_dir }
    }

    /// The API credential, possibly empty.
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Whether a non-empty credential was configured.
    pub fn has_api_key(&self) -> bool {
        !self.api_key.expose_secret().is_empty()
    }

    /// Directory collaborators use as the root for data files.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve `relative` against the base directory.
    pub fn data_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(relative)
    }
}

/// The directory one level above `dir`.
///
/// A filesystem root has no parent and maps to itself. A relative
/// single-segment path maps to `.`.
pub fn base_directory_of(dir: &Path) -> PathBuf {
    match dir.parent() {
        Some(parent) if parent.as_os_str().is_empty() => PathBuf::from("."),
        Some(parent) => parent.to_path_buf(),
        None => dir.to_path_buf(),
    }
}
