//! Configuration module for Translator Tutor.
//!
//! Provides `TutorConfig` (top-level settings), sub-configs for each
//! subsystem, `AppPaths` for cross-platform data directories, and TOML
//! persistence via `TutorConfig::load` / `TutorConfig::save`.
//!
//! The chat API key deliberately lives outside the config file: it is read
//! once at startup from the `COHERE_API_KEY` environment variable.

pub mod paths;
pub mod settings;

pub use paths::AppPaths;
pub use settings::{ChatConfig, TtsConfig, TutorConfig, UiConfig};
