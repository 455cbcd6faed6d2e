//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

// ---------------------------------------------------------------------------
// ChatConfig
// ---------------------------------------------------------------------------

/// Settings for the chat-completion provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Base URL of the Cohere-compatible API endpoint.
    pub base_url: String,
    /// Model identifier sent with each request.
    pub model: String,
    /// Fixed output-token cap passed to the provider; there is no other
    /// token-budget accounting.
    pub max_tokens: u32,
    /// Maximum seconds to wait for a reply before timing out.
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.cohere.com".into(),
            model: "command-r-08-2024".into(),
            max_tokens: 600,
            timeout_secs: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// TtsConfig
// ---------------------------------------------------------------------------

/// Settings for the text-to-speech provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsConfig {
    /// URL of the `translate_tts` endpoint.
    pub endpoint: String,
    /// Language tag sent with every synthesis request (e.g. `"ja"`).
    pub language: String,
    /// Maximum seconds to wait for one synthesis call.
    pub timeout_secs: u64,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://translate.google.com/translate_tts".into(),
            language: "ja".into(),
            timeout_secs: 15,
        }
    }
}

// ---------------------------------------------------------------------------
// UiConfig
// ---------------------------------------------------------------------------

/// egui window appearance and behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Initial window size `(width, height)` in logical pixels.
    pub window_size: (f32, f32),
    /// Last saved window position `(x, y)`. `None` means let the OS / window
    /// manager pick a position on first launch.
    pub window_position: Option<(f32, f32)>,
    /// Path to the theme TOML applied to the UI at startup. A missing or
    /// unparsable file is a fatal startup error.
    pub theme_file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_size: (480.0, 680.0),
            window_position: None,
            theme_file: "assets/japanese_theme.toml".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// TutorConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use translator_tutor::config::TutorConfig;
///
/// // Load (returns Default when file is missing)
/// let config = TutorConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TutorConfig {
    /// Chat-completion provider settings.
    pub chat: ChatConfig,
    /// Text-to-speech provider settings.
    pub tts: TtsConfig,
    /// UI / window settings.
    pub ui: UiConfig,
}

impl TutorConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(TutorConfig::default())` when the file does not exist yet
    /// (first-run scenario) so callers never need to special-case a missing
    /// file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::new().settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::new().settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Verify that a default `TutorConfig` can be serialised to TOML and
    /// deserialised back without any data loss.
    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = TutorConfig::default();
        original.save_to(&path).expect("save");

        let loaded = TutorConfig::load_from(&path).expect("load");

        assert_eq!(original.chat.base_url, loaded.chat.base_url);
        assert_eq!(original.chat.model, loaded.chat.model);
        assert_eq!(original.chat.max_tokens, loaded.chat.max_tokens);
        assert_eq!(original.chat.timeout_secs, loaded.chat.timeout_secs);

        assert_eq!(original.tts.endpoint, loaded.tts.endpoint);
        assert_eq!(original.tts.language, loaded.tts.language);
        assert_eq!(original.tts.timeout_secs, loaded.tts.timeout_secs);

        assert_eq!(original.ui.window_size, loaded.ui.window_size);
        assert_eq!(original.ui.window_position, loaded.ui.window_position);
        assert_eq!(original.ui.theme_file, loaded.ui.theme_file);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = TutorConfig::load_from(&path).expect("should not error");
        let default = TutorConfig::default();

        assert_eq!(config.chat.model, default.chat.model);
        assert_eq!(config.tts.language, default.tts.language);
        assert_eq!(config.ui.theme_file, default.ui.theme_file);
    }

    #[test]
    fn default_values() {
        let cfg = TutorConfig::default();

        assert_eq!(cfg.chat.base_url, "https://api.cohere.com");
        assert_eq!(cfg.chat.model, "command-r-08-2024");
        assert_eq!(cfg.chat.max_tokens, 600);
        assert_eq!(cfg.tts.language, "ja");
        assert_eq!(cfg.ui.theme_file, "assets/japanese_theme.toml");
    }

    /// Verify that modified non-default values survive a round trip.
    #[test]
    fn round_trip_modified_values() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("modified.toml");

        let mut cfg = TutorConfig::default();
        cfg.chat.model = "command-r-plus".into();
        cfg.chat.max_tokens = 1000;
        cfg.tts.language = "en".into();
        cfg.ui.window_position = Some((100.0, 200.0));
        cfg.ui.theme_file = "assets/custom.toml".into();

        cfg.save_to(&path).expect("save");
        let loaded = TutorConfig::load_from(&path).expect("load");

        assert_eq!(loaded.chat.model, "command-r-plus");
        assert_eq!(loaded.chat.max_tokens, 1000);
        assert_eq!(loaded.tts.language, "en");
        assert_eq!(loaded.ui.window_position, Some((100.0, 200.0)));
        assert_eq!(loaded.ui.theme_file, "assets/custom.toml");
    }
}
