//! Transcribe a pre-recorded audio file.
//!
//! Acts as the host for a single provider call: loads configuration, builds the
//! provider, checks the file's metadata against the provider's capabilities and
//! streams the audio to it.

use std::path::{Path, PathBuf};

use anyhow::anyhow;

use crate::audio_file::AudioFile;
use crate::config;
use crate::transcription::{self, TranscriptionResult};

/// Language used when none is given on the command line
pub const DEFAULT_LANGUAGE: &str = "ru-RU";

/// Handles transcription of a pre-recorded audio file.
///
/// # Arguments
/// * `file` - Path to a WAV or Ogg/Opus file
/// * `language` - Language-region tag, e.g. "en-US"
/// * `output_file` - Optional file path to write output to instead of stdout
///
/// # Errors
/// - If the file is missing, unreadable or not supported by the provider
/// - If configuration cannot be loaded or the provider cannot be built
/// - If the provider reports an error or the user interrupts the call
pub async fn handle_transcribe(
    file: PathBuf,
    language: String,
    output_file: Option<PathBuf>,
) -> anyhow::Result<()> {
    tracing::info!("=== yastt Transcribe Command ===");

    if !file.exists() {
        return Err(anyhow!("Audio file not found: {}", file.display()));
    }

    let config_data = config::YasttConfig::load().map_err(|err| {
        tracing::error!("Failed to load configuration: {err}");
        anyhow!("Configuration error: {err}")
    })?;

    let client = http_client()?;
    let provider = transcription::build_provider(client, &config_data)?;

    let audio = AudioFile::load(&file, &language)?;
    tracing::info!(
        "Transcribing {} ({} bytes, {} {} Hz {}) with {}",
        file.display(),
        audio.data.len(),
        audio.metadata.codec,
        audio.metadata.sample_rate,
        audio.metadata.channels,
        provider.name()
    );

    transcription::is_supported(provider.as_ref(), &audio.metadata)
        .map_err(|e| anyhow!("{} cannot handle this audio: {e}", provider.name()))?;

    let metadata = audio.metadata.clone();
    let result = tokio::select! {
        result = provider.transcribe(metadata, audio.into_stream()) => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Transcription interrupted by user");
            return Err(anyhow!("Transcription interrupted"));
        }
    };

    let text = match result {
        TranscriptionResult::Success { text } => text,
        TranscriptionResult::Error { message } => {
            tracing::error!("Transcription failed: {message}");
            return Err(anyhow!("Transcription failed: {message}"));
        }
    };

    tracing::debug!("Transcription completed: {} characters", text.chars().count());
    write_output(&text, output_file.as_deref())
}

/// Builds the HTTP client shared by the provider for its lifetime.
fn http_client() -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(concat!("yastt/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| anyhow!("Failed to build HTTP client: {e}"))
}

/// Writes the transcript to `output_file`, or stdout when none is given.
fn write_output(text: &str, output_file: Option<&Path>) -> anyhow::Result<()> {
    if let Some(path) = output_file {
        std::fs::write(path, text)
            .map_err(|e| anyhow!("Failed to write to file '{}': {e}", path.display()))?;
        tracing::debug!("Transcribed text written to file: {}", path.display());
    } else {
        println!("{text}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcript.txt");
        write_output("привет мир", Some(&path)).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "привет мир");
    }

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let err = handle_transcribe(
            PathBuf::from("/definitely/not/here.wav"),
            DEFAULT_LANGUAGE.to_string(),
            None,
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Audio file not found"));
    }
}
