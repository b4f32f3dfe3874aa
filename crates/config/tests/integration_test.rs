//! Integration tests for settings loading through the public API.
//!
//! These tests verify that the builder chain used by the CLI and by embedding
//! applications resolves both values without touching process-wide state.

use naive_rag_config::constants::API_KEY_VAR;
use naive_rag_config::{
    ConfigError, ConfigSource, DotenvSource, LayeredSource, MapSource, SettingsLoader,
};
use secrecy::ExposeSecret;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A source that counts lookups, standing in for a remote secret store.
struct CountingSource {
    value: String,
    lookups: std::sync::atomic::AtomicUsize,
}

impl ConfigSource for CountingSource {
    fn get(&self, key: &str) -> Option<String> {
        self.lookups
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        (key == API_KEY_VAR).then(|| self.value.clone())
    }

    fn name(&self) -> &str {
        "counting"
    }
}

#[test]
fn test_custom_source_is_consulted() {
    let loader = SettingsLoader::new().with_source(CountingSource {
        value: "sk-custom".to_string(),
        lookups: Default::default(),
    });

    assert_eq!(loader.resolve_api_key().expose_secret(), "sk-custom");
    assert_eq!(loader.source_names(), vec!["counting"]);
}

#[test]
fn test_full_chain_with_explicit_inputs() {
    let dir = TempDir::new().unwrap();
    let env_file = dir.path().join("rag.env");
    fs::write(&env_file, format!("{API_KEY_VAR}=sk-from-file\n")).unwrap();

    let settings = SettingsLoader::new()
        .with_source(DotenvSource::from_path(&env_file).unwrap())
        .with_working_dir(PathBuf::from("/home/user/project/naive_rag"))
        .build()
        .expect("should build with explicit inputs");

    assert_eq!(settings.api_key().expose_secret(), "sk-from-file");
    assert_eq!(settings.base_dir(), Path::new("/home/user/project"));
}

#[test]
fn test_missing_key_is_not_an_error() {
    let settings = SettingsLoader::new()
        .with_source(MapSource::new().with("SOME_OTHER_KEY", "value"))
        .with_working_dir(PathBuf::from("/srv/app"))
        .build()
        .expect("a missing credential must not fail the build");

    assert!(!settings.has_api_key());
    assert_eq!(settings.api_key().expose_secret(), "");
}

#[test]
fn test_layered_source_exported() {
    let mut layered = LayeredSource::new();
    layered.push(MapSource::new().with(API_KEY_VAR, "top"));
    layered.push(MapSource::new().with(API_KEY_VAR, "bottom"));

    let loader = SettingsLoader::new().with_source(layered);
    assert_eq!(loader.resolve_api_key().expose_secret(), "top");
}

#[test]
fn test_error_type_is_displayable() {
    let err = DotenvSource::from_path("/nonexistent/naive-rag/.env").unwrap_err();
    assert!(matches!(err, ConfigError::DotenvIo { .. }));
    assert!(err.to_string().contains("/nonexistent/naive-rag/.env"));
}
