//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for every configuration loading failure.
//! - Convert `dotenvy` failures into variants that carry no file contents.
//!
//! Does NOT handle:
//! - Missing credentials. An absent key is not an error; it resolves to the default.
//! - Unparseable `.env` lines. `DotenvSource` skips those with a warning.
//!
//! Invariants:
//! - All error variants include context for debugging (paths, error kinds).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The process working directory could not be read, so no base directory exists.
    #[error("Failed to read the current working directory: {0}")]
    WorkingDirUnavailable(#[source] std::io::Error),

    /// Failed to read a `.env` file due to an I/O error.
    ///
    /// Invalid UTF-8 in the file surfaces here with `ErrorKind::InvalidData`.
    #[error(
        "Failed to read .env file at {path}: {kind}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Any other dotenv error, including a line parse error reaching this
    /// mapping (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error(
        "Failed to load .env file at {path}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvUnknown { path: PathBuf },
}

impl ConfigError {
    /// Map a `dotenvy` error for `path` onto a variant that is safe to display.
    pub(crate) fn from_dotenv(path: &Path, err: dotenvy::Error) -> Self {
        let path = path.to_path_buf();
        match err {
            dotenvy::Error::Io(io_err) => Self::DotenvIo {
                path,
                kind: io_err.kind(),
            },
            _ => Self::DotenvUnknown { path },
        }
    }
}
