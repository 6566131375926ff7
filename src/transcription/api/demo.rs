//! Canned provider for trying the pipeline without credentials or network.

use std::future::Future;
use std::pin::Pin;

use futures::StreamExt;

use crate::transcription::capabilities::DEMO_LANGUAGES;
use crate::transcription::metadata::{
    AudioBitRate, AudioChannels, AudioCodec, AudioFormat, AudioMetadata, AudioSampleRate,
};
use crate::transcription::provider::{
    AudioStream, ProviderKind, SpeechProvider, TranscriptionResult,
};

pub const DEMO_TRANSCRIPT: &str = "Turn the Kitchen Lights on";

#[derive(Debug, Default)]
pub struct DemoProvider;

impl DemoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl SpeechProvider for DemoProvider {
    fn name(&self) -> &'static str {
        ProviderKind::Demo.name()
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        DEMO_LANGUAGES
    }

    fn supported_formats(&self) -> &'static [AudioFormat] {
        &[AudioFormat::Wav, AudioFormat::Ogg]
    }

    fn supported_codecs(&self) -> &'static [AudioCodec] {
        &[AudioCodec::Pcm, AudioCodec::Opus]
    }

    fn supported_bit_rates(&self) -> &'static [AudioBitRate] {
        &[AudioBitRate::Bits16]
    }

    fn supported_sample_rates(&self) -> &'static [AudioSampleRate] {
        &[
            AudioSampleRate::Hz16000,
            AudioSampleRate::Hz44100,
            AudioSampleRate::Hz48000,
        ]
    }

    fn supported_channels(&self) -> &'static [AudioChannels] {
        &[AudioChannels::Mono, AudioChannels::Stereo]
    }

    fn transcribe<'a>(
        &'a self,
        metadata: AudioMetadata,
        mut stream: AudioStream<'a>,
    ) -> Pin<Box<dyn Future<Output = TranscriptionResult> + Send + 'a>> {
        Box::pin(async move {
            // Drain so callers observe the same consumption as a real provider.
            let mut received = 0usize;
            while let Some(chunk) = stream.next().await {
                received += chunk.len();
            }
            tracing::debug!(
                "Demo transcription of {} bytes ({})",
                received,
                metadata.language
            );
            TranscriptionResult::Success {
                text: DEMO_TRANSCRIPT.to_string(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn demo_returns_canned_text() {
        let provider = DemoProvider::new();
        let metadata = AudioMetadata {
            language: "en-US".into(),
            format: AudioFormat::Wav,
            codec: AudioCodec::Pcm,
            bit_rate: AudioBitRate::Bits16,
            sample_rate: AudioSampleRate::Hz16000,
            channels: AudioChannels::Stereo,
        };
        let audio = stream::iter(vec![vec![0u8; 32], vec![1u8; 32]]).boxed();

        let result = provider.transcribe(metadata, audio).await;
        assert_eq!(
            result,
            TranscriptionResult::Success {
                text: DEMO_TRANSCRIPT.into()
            }
        );
    }
}
