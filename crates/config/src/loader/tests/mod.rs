//! Tests for the settings loader.
//!
//! Responsibilities:
//! - Test source precedence (override > environment > `.env` > default).
//! - Test `.env` discovery, the `DOTENV_DISABLED` gate, and error hygiene.
//! - Test base directory computation from explicit and process working directories.
//!
//! Invariants:
//! - Every test that reads or mutates the process environment or working
//!   directory is `#[serial]`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use tempfile::TempDir;


/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(temp_dir: &TempDir) -> Self {
        Self::enter(temp_dir.path().to_path_buf())
    }

    pub fn enter(dir: PathBuf) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(&dir).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
