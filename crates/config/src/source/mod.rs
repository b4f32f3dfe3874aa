//! Configuration sources.
//!
//! Responsibilities:
//! - Define the `ConfigSource` capability: resolve a named key to a string.
//! - Provide sources for the process environment, `.env` files, in-memory maps,
//!   and an ordered combination of them.
//!
//! Does NOT handle:
//! - Defaults or overrides (see `loader`).
//! - Mutating the process environment. No source ever calls `set_var`.
//!
//! Invariants:
//! - A key that is present with an empty value is reported as `Some("")`.
//! - Values are returned verbatim: no trimming, no interpolation beyond what
//!   the `.env` parser itself performs.

mod dotenv;
mod env;
mod layered;
mod map;

pub use dotenv::DotenvSource;
pub use env::EnvSource;
pub use layered::LayeredSource;
pub use map::MapSource;

/// A place configuration values can be read from.
///
/// Tests substitute a [`MapSource`] here instead of mutating real
/// environment variables.
pub trait ConfigSource: Send + Sync {
    /// Look up `key`, returning `None` if this source does not define it.
    fn get(&self, key: &str) -> Option<String>;

    /// Short human-readable label used in log output.
    fn name(&self) -> &str;

    /// Look up `key`, falling back to `default` when the source does not define it.
    fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }
}

impl<S: ConfigSource + ?Sized> ConfigSource for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
