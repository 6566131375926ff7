//! Speech-to-text provider adapter for Yandex SpeechKit.
//!
//! Hosts build a provider once with [`transcription::build_provider`], query its
//! capability descriptor, and call [`transcription::SpeechProvider::transcribe`]
//! with audio metadata and a stream of audio chunks.

pub mod app;
pub mod audio_file;
pub mod commands;
pub mod config;
pub mod logging;
pub mod setup;
pub mod transcription;
