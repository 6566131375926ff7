//! Print what the configured provider accepts.

use std::fmt::Display;

use crate::config::{self, YasttConfig};
use crate::transcription::{self, ProviderKind, RecognitionTopic, SpeechProvider};

/// Shows the capability sets of the configured provider.
///
/// Works before an API key has been set up.
///
/// # Errors
/// - If configuration cannot be loaded
pub fn handle_capabilities() -> anyhow::Result<()> {
    let config_data = config::YasttConfig::load()?;
    println!("{}", describe_configured(&config_data));
    Ok(())
}

fn join<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders the capability descriptor as plain text.
pub fn describe(provider: &dyn SpeechProvider) -> String {
    format!(
        "{}\n\n  Languages:    {}\n  Formats:      {}\n  Codecs:       {}\n  Bit rates:    {}\n  Sample rates: {}\n  Channels:     {}",
        provider.name(),
        provider.supported_languages().join(", "),
        join(provider.supported_formats()),
        join(provider.supported_codecs()),
        join(provider.supported_bit_rates()),
        join(provider.supported_sample_rates()),
        join(provider.supported_channels()),
    )
}

/// Describes the provider selected in `config`, with its recognition topics.
pub fn describe_configured(config: &YasttConfig) -> String {
    let provider = transcription::configured_provider(reqwest::Client::new(), config);
    let mut text = format!(
        "provider = \"{}\"\n\n{}",
        config.provider.id(),
        describe(provider.as_ref())
    );

    if config.provider == ProviderKind::Yandex {
        text.push_str("\n  Topics:");
        for topic in RecognitionTopic::all() {
            let marker = if *topic == config.yandex.topic { "*" } else { " " };
            text.push_str(&format!(
                "\n    {marker} {:<20}{}",
                topic.id(),
                topic.description()
            ));
        }
    }

    text
}
