//! Process environment source.

use tracing::debug;

use super::ConfigSource;

/// Reads values from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        let raw = std::env::var_os(key)?;
        match raw.into_string() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!(key, "ignoring environment variable that is not valid Unicode");
                None
            }
        }
    }

    fn name(&self) -> &str {
        "environment"
    }
}
