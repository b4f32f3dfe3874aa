//! Shared test utilities for naive-rag CLI integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `OPENAI_API_KEY` is cleared so the host credential never leaks in.

use assert_cmd::Command;
use std::path::Path;

/// Returns a hermetic `naive-rag` command running in `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `OPENAI_API_KEY` is removed from the inherited environment.
pub fn naive_rag_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("naive-rag");
    cmd.current_dir(dir);
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("OPENAI_API_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Canonical form of `dir`, matching what the process sees as its working directory.
#[allow(dead_code)]
pub fn canonical(dir: &Path) -> std::path::PathBuf {
    dir.canonicalize().expect("Failed to canonicalize path")
}
