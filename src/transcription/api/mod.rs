//! Transcription API clients with provider-specific implementations.
//!
//! Each provider implements [`SpeechProvider`]; [`build_provider`] is the single
//! construction entry point a host uses once configuration is loaded.

mod demo;
mod shared;
mod yandex;

use std::sync::Arc;

use reqwest::header::HeaderValue;

pub use demo::{DemoProvider, DEMO_TRANSCRIPT};
pub use yandex::{YandexSttProvider, REQUEST_TIMEOUT, YANDEX_API_URL};

use super::provider::{ProviderKind, SpeechProvider};
use crate::config::YasttConfig;

/// Builds the configured provider on top of the host's HTTP client.
///
/// # Errors
/// - If the Yandex provider is selected without an API key
/// - If the API key cannot be sent in an HTTP header
pub fn build_provider(
    client: reqwest::Client,
    config: &YasttConfig,
) -> anyhow::Result<Arc<dyn SpeechProvider>> {
    tracing::info!("Setting up {} provider", config.provider.name());

    if config.provider == ProviderKind::Yandex {
        let key = &config.yandex.api_key;
        if key.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "No API key for {}. Set yandex.api_key in the config file or {}",
                ProviderKind::Yandex.name(),
                crate::config::API_KEY_ENV
            ));
        }
        if HeaderValue::from_str(&format!("Api-Key {key}")).is_err() {
            return Err(anyhow::anyhow!(
                "API key for {} contains characters not allowed in an HTTP header (check for stray whitespace or newlines)",
                ProviderKind::Yandex.name()
            ));
        }
        tracing::debug!("SpeechKit settings: {:?}", config.yandex);
    }

    Ok(configured_provider(client, config))
}

/// Instantiates the configured provider without checking its credentials.
///
/// Enough for reading the capability descriptor; use [`build_provider`] before
/// transcribing.
pub fn configured_provider(
    client: reqwest::Client,
    config: &YasttConfig,
) -> Arc<dyn SpeechProvider> {
    match config.provider {
        ProviderKind::Yandex => Arc::new(YandexSttProvider::new(client, config.yandex.clone())),
        ProviderKind::Demo => Arc::new(DemoProvider::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yandex_without_key_is_rejected() {
        let config = YasttConfig::default();
        let err = build_provider(reqwest::Client::new(), &config).unwrap_err();
        assert!(err.to_string().contains("No API key"));
    }

    #[test]
    fn key_with_trailing_newline_is_rejected() {
        let mut config = YasttConfig::default();
        config.yandex.api_key = "abc\n".into();
        let err = build_provider(reqwest::Client::new(), &config).unwrap_err();
        assert!(err.to_string().contains("not allowed in an HTTP header"));
    }

    #[test]
    fn configured_provider_needs_no_key() {
        let config = YasttConfig::default();
        let provider = configured_provider(reqwest::Client::new(), &config);
        assert_eq!(provider.name(), "YandexSpeechKit STT");
    }

    #[test]
    fn builds_selected_provider() {
        let mut config = YasttConfig::default();
        config.yandex.api_key = "key".into();
        let provider = build_provider(reqwest::Client::new(), &config).unwrap();
        assert_eq!(provider.name(), "YandexSpeechKit STT");
        assert_eq!(provider.supported_languages().len(), 16);

        config.provider = ProviderKind::Demo;
        config.yandex.api_key.clear();
        let provider = build_provider(reqwest::Client::new(), &config).unwrap();
        assert_eq!(provider.name(), "Demo STT");
    }
}
