//! CLI exit codes and command errors.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map command errors to exit codes.
//!
//! Invariants:
//! - Exit code 1 covers every startup failure (working directory, .env file).
//! - Exit code 2 is reserved for a missing API key.

use thiserror::Error;

/// Errors raised by commands themselves (as opposed to configuration loading).
#[derive(Error, Debug)]
pub enum CliError {
    #[error("OPENAI_API_KEY is not set. Export it or add it to a .env file.")]
    MissingApiKey,
}

/// Structured exit codes for naive-rag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - startup failure or unhandled error.
    GeneralError = 1,

    /// No API key configured.
    ///
    /// Scripts should provide a credential before starting collaborators that need one.
    MissingApiKey = 2,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::MissingApiKey => ExitCode::MissingApiKey,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no CliError is found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<CliError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
