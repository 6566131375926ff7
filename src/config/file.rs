//! Configuration file management for yastt.
//!
//! This module handles loading application configuration from TOML files.
//! Configuration is stored in the user's config directory.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::transcription::{ProviderKind, RecognitionTopic};

/// Environment variable that overrides `yandex.api_key`.
pub const API_KEY_ENV: &str = "YASTT_API_KEY";

/// Default upper bound on buffered audio (32 MiB).
pub const DEFAULT_MAX_AUDIO_BYTES: usize = 32 * 1024 * 1024;

/// Yandex SpeechKit provider configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct YandexConfig {
    /// API key of a service account with the `ai.speechkit-stt.user` role
    #[serde(default)]
    pub api_key: String,
    /// Recognition model
    #[serde(default)]
    pub topic: RecognitionTopic,
    /// Exclude profanity from recognized text
    #[serde(default)]
    pub profanity_filter: bool,
    /// Spell out numbers instead of writing digits
    #[serde(default)]
    pub raw_results: bool,
    /// Largest audio payload buffered before the request is abandoned
    #[serde(default = "default_max_audio_bytes")]
    pub max_audio_bytes: usize,
}

fn default_max_audio_bytes() -> usize {
    DEFAULT_MAX_AUDIO_BYTES
}

impl Default for YandexConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            topic: RecognitionTopic::default(),
            profanity_filter: false,
            raw_results: false,
            max_audio_bytes: default_max_audio_bytes(),
        }
    }
}

impl std::fmt::Debug for YandexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YandexConfig")
            .field("api_key", &"<redacted>")
            .field("topic", &self.topic)
            .field("profanity_filter", &self.profanity_filter)
            .field("raw_results", &self.raw_results)
            .field("max_audio_bytes", &self.max_audio_bytes)
            .finish()
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YasttConfig {
    /// Which provider implementation serves requests
    #[serde(default)]
    pub provider: ProviderKind,
    #[serde(default)]
    pub yandex: YandexConfig,
}

impl YasttConfig {
    /// Loads configuration from the user's config directory.
    ///
    /// # Errors
    /// - If the config directory cannot be determined
    /// - If the config file cannot be read
    /// - If the TOML is malformed or names an unknown topic/provider
    pub fn load() -> anyhow::Result<Self> {
        let config_path = get_config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(std::env::var(API_KEY_ENV).ok());
        Ok(config)
    }

    /// Loads configuration from an explicit path, without environment overrides.
    ///
    /// # Errors
    /// - If the file cannot be read
    /// - If the TOML is malformed
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let config_content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
        let config: YasttConfig = toml::from_str(&config_content)
            .map_err(|e| anyhow::anyhow!("Invalid configuration in {}: {e}", path.display()))?;
        Ok(config)
    }

    /// Replaces the configured API key with a non-empty environment value.
    pub fn apply_env_overrides(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            tracing::debug!("Using API key from {API_KEY_ENV}");
            self.yandex.api_key = key;
        }
    }
}

/// Retrieves the path to the config file, creating its directory if needed.
///
/// # Errors
/// - If the home directory cannot be determined
/// - If the config directory cannot be created
pub fn get_config_path() -> anyhow::Result<PathBuf> {
    let config_dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?
        .join(".config")
        .join("yastt");

    fs::create_dir_all(&config_dir)
        .map_err(|e| anyhow::anyhow!("Failed to create config directory: {e}"))?;

    Ok(config_dir.join("yastt.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let file = write_config("[yandex]\napi_key = \"k\"\n");
        let config = YasttConfig::load_from(file.path()).unwrap();
        assert_eq!(config.provider, ProviderKind::Yandex);
        assert_eq!(config.yandex.api_key, "k");
        assert_eq!(config.yandex.topic, RecognitionTopic::General);
        assert!(!config.yandex.profanity_filter);
        assert!(!config.yandex.raw_results);
        assert_eq!(config.yandex.max_audio_bytes, DEFAULT_MAX_AUDIO_BYTES);
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"
provider = "demo"

[yandex]
api_key = "secret"
topic = "general:deprecated"
profanity_filter = true
raw_results = true
max_audio_bytes = 1024
"#,
        );
        let config = YasttConfig::load_from(file.path()).unwrap();
        assert_eq!(config.provider, ProviderKind::Demo);
        assert_eq!(config.yandex.topic, RecognitionTopic::GeneralDeprecated);
        assert!(config.yandex.profanity_filter);
        assert!(config.yandex.raw_results);
        assert_eq!(config.yandex.max_audio_bytes, 1024);
    }

    #[test]
    fn test_unknown_topic_is_rejected() {
        let file = write_config("[yandex]\ntopic = \"maps\"\n");
        let err = YasttConfig::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid configuration"));
    }

    #[test]
    fn test_env_override_ignores_blank_values() {
        let mut config = YasttConfig::default();
        config.yandex.api_key = "from-file".into();

        config.apply_env_overrides(Some("   ".into()));
        assert_eq!(config.yandex.api_key, "from-file");

        config.apply_env_overrides(None);
        assert_eq!(config.yandex.api_key, "from-file");

        config.apply_env_overrides(Some("from-env".into()));
        assert_eq!(config.yandex.api_key, "from-env");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = YandexConfig::default();
        config.api_key = "AQVN-secret".into();
        let debug = format!("{config:?}");
        assert!(!debug.contains("AQVN-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
