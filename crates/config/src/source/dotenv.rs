//! `.env` repository file source.
//!
//! Responsibilities:
//! - Parse a `.env` file into memory with `dotenvy`.
//! - Locate a `.env` file by walking upward from a starting directory.
//!
//! Invariants:
//! - Parsing never touches the process environment.
//! - Later duplicate keys in a file replace earlier ones.
//! - Lines that do not parse are skipped; only their byte position is logged,
//!   never their contents.
//! - Read failures are fatal and never include raw line contents (see
//!   `ConfigError::from_dotenv`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::ConfigSource;
use crate::constants::ENV_FILE_NAME;
use crate::loader::ConfigError;

/// Values parsed from a single `.env` file.
#[derive(Clone)]
pub struct DotenvSource {
    path: PathBuf,
    label: String,
    values: HashMap<String, String>,
    skipped_lines: usize,
}

impl DotenvSource {
    /// Parse the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvIo` if the file cannot be opened or read,
    /// including when it does not exist or is not valid UTF-8. Lines with
    /// invalid syntax are skipped with a warning.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let iter =
            dotenvy::from_path_iter(path).map_err(|e| ConfigError::from_dotenv(path, e))?;

        let mut values = HashMap::new();
        let mut skipped_lines = 0;
        for item in iter {
            match item {
                Ok((key, value)) => {
                    values.insert(key, value);
                }
                Err(dotenvy::Error::LineParse(_, position)) => {
                    skipped_lines += 1;
                    warn!(
                        path = %path.display(),
                        position,
                        "skipping unparseable line in .env file"
                    );
                }
                Err(e) => return Err(ConfigError::from_dotenv(path, e)),
            }
        }

        debug!(
            path = %path.display(),
            entries = values.len(),
            skipped_lines,
            "parsed .env file"
        );

        Ok(Self {
            path: path.to_path_buf(),
            label: format!("dotenv:{}", path.display()),
            values,
            skipped_lines,
        })
    }

    /// Find the nearest `.env` file, starting in `start` and walking up to the root.
    ///
    /// Only regular files match; a directory named `.env` is skipped.
    pub fn discover(start: &Path) -> Option<PathBuf> {
        start
            .ancestors()
            .map(|dir| dir.join(ENV_FILE_NAME))
            .find(|candidate| candidate.is_file())
    }

    /// Path of the parsed file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines dropped because they did not parse.
    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }
}

impl ConfigSource for DotenvSource {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn name(&self) -> &str {
        &self.label
    }
}

impl std::fmt::Debug for DotenvSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DotenvSource")
            .field("path", &self.path)
            .field("entries", &self.values.len())
            .field("skipped_lines", &self.skipped_lines)
            .finish()
    }
}
