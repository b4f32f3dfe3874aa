//! Centralized constants for the naive-rag configuration layer.
//!
//! Key names and defaults live here so the loader, the CLI and the tests
//! agree on them.

// =============================================================================
// Configuration Keys
// =============================================================================

/// Configuration key holding the LLM provider credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Defaults
// =============================================================================

/// Credential value used when no source provides one.
pub const DEFAULT_API_KEY: &str = "";

/// File name searched for when discovering a repository file.
pub const ENV_FILE_NAME: &str = ".env";
