//! Configuration for the naive-rag application.
//!
//! This crate resolves the LLM provider credential (`OPENAI_API_KEY`) from the
//! process environment and `.env` files, and computes the base directory
//! collaborators use to locate data files: the parent of the working
//! directory at startup.
//!
//! Values can be held process-wide ([`init`], [`get_api_key`],
//! [`get_base_directory`]) or built and passed explicitly through
//! [`SettingsLoader`] and [`Settings`].

pub mod constants;
mod global;
mod loader;
mod settings;
pub mod source;

pub use global::{get_api_key, get_base_directory, init, init_with, install};
pub use loader::{ConfigError, SettingsLoader};
pub use settings::{Settings, base_directory_of};
pub use source::{ConfigSource, DotenvSource, EnvSource, LayeredSource, MapSource};
