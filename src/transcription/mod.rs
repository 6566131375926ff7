//! Speech-to-text providers.
//!
//! This module defines the provider abstraction, the audio metadata model, the
//! static capability tables, and the concrete Yandex SpeechKit and demo
//! providers behind a unified interface.

pub mod api;
pub mod capabilities;
pub mod error;
pub mod metadata;
pub mod model;
pub mod provider;

pub use api::{build_provider, configured_provider, DemoProvider, YandexSttProvider};
pub use capabilities::{is_supported, UnsupportedMetadata};
pub use error::TranscriptionError;
pub use metadata::{
    AudioBitRate, AudioChannels, AudioCodec, AudioFormat, AudioMetadata, AudioSampleRate,
};
pub use model::RecognitionTopic;
pub use provider::{AudioStream, ProviderKind, SpeechProvider, TranscriptionResult};
