//! Settings loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Stack configuration sources into a builder-pattern `SettingsLoader`.
//! - Resolve the API credential and the base directory into `Settings`.
//! - Enforce the `DOTENV_DISABLED` gate before any `.env` file is read.
//!
//! Does NOT handle:
//! - Process-wide storage of the loaded values (see `global`).
//! - Validating the credential. Consumers decide whether an empty key is fatal.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over `.env` file values.
//! - Explicit builder overrides take precedence over every source.
//! - The process environment is never mutated while loading.

mod builder;
mod error;

#[cfg(test)]
mod tests;

pub use builder::SettingsLoader;
pub(crate) use builder::base_directory_from_cwd;
pub use error::ConfigError;
