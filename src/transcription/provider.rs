//! Speech provider abstraction.
//!
//! A provider advertises what audio it accepts (its capability descriptor) and
//! turns a finite audio stream into a [`TranscriptionResult`]. Hosts hold
//! providers as `Arc<dyn SpeechProvider>` and may call `transcribe`
//! concurrently from many tasks.

use std::future::Future;
use std::pin::Pin;

use futures::stream::BoxStream;
use serde::{Deserialize, Serialize};

use super::error::TranscriptionError;
use super::metadata::{
    AudioBitRate, AudioChannels, AudioCodec, AudioFormat, AudioMetadata, AudioSampleRate,
};

/// Lazily produced audio chunks, consumed exactly once.
pub type AudioStream<'a> = BoxStream<'a, Vec<u8>>;

/// Outcome of a single transcription call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptionResult {
    Success { text: String },
    Error { message: String },
}

impl TranscriptionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

impl From<Result<String, TranscriptionError>> for TranscriptionResult {
    fn from(result: Result<String, TranscriptionError>) -> Self {
        match result {
            Ok(text) => Self::Success { text },
            Err(e) => Self::Error {
                message: e.to_string(),
            },
        }
    }
}

/// Represents a supported provider implementation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    #[default]
    Yandex,
    Demo,
}

impl ProviderKind {
    pub fn id(&self) -> &'static str {
        match self {
            ProviderKind::Yandex => "yandex",
            ProviderKind::Demo => "demo",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProviderKind::Yandex => "YandexSpeechKit STT",
            ProviderKind::Demo => "Demo STT",
        }
    }
}

/// Trait implemented by every speech-to-text backend.
pub trait SpeechProvider: std::fmt::Debug + Send + Sync {
    /// Human-readable provider name.
    fn name(&self) -> &'static str;

    /// Language-region tags the provider accepts, in display order.
    fn supported_languages(&self) -> &'static [&'static str];

    fn supported_formats(&self) -> &'static [AudioFormat];

    fn supported_codecs(&self) -> &'static [AudioCodec];

    fn supported_bit_rates(&self) -> &'static [AudioBitRate];

    fn supported_sample_rates(&self) -> &'static [AudioSampleRate];

    fn supported_channels(&self) -> &'static [AudioChannels];

    /// Transcribe a finite audio stream.
    ///
    /// Never fails at the Rust level: every failure is reported as
    /// [`TranscriptionResult::Error`]. Dropping the returned future abandons
    /// both stream consumption and any in-flight request.
    fn transcribe<'a>(
        &'a self,
        metadata: AudioMetadata,
        stream: AudioStream<'a>,
    ) -> Pin<Box<dyn Future<Output = TranscriptionResult> + Send + 'a>>;
}
