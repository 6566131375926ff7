//! Loading audio files from disk into provider input.
//!
//! WAV files are decoded with hound and their samples re-encoded as raw
//! little-endian LPCM, which is what SpeechKit expects for the `lpcm` format.
//! Ogg/Opus files are passed through untouched.

use std::path::Path;

use anyhow::anyhow;
use futures::stream::{self, StreamExt};

use crate::transcription::{
    AudioBitRate, AudioChannels, AudioCodec, AudioFormat, AudioMetadata, AudioSampleRate,
    AudioStream,
};

/// Size of the chunks handed to the provider
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Audio payload plus the metadata describing it
#[derive(Debug)]
pub struct AudioFile {
    pub metadata: AudioMetadata,
    pub data: Vec<u8>,
}

impl AudioFile {
    /// Reads an audio file, choosing the decoder from its extension.
    ///
    /// # Errors
    /// - If the extension is not `wav`, `ogg` or `opus`
    /// - If the file cannot be read or decoded
    /// - If the WAV is not 16-bit integer PCM or uses an unknown sample rate
    pub fn load(path: &Path, language: &str) -> anyhow::Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "wav" => load_wav(path, language),
            "ogg" | "opus" => load_ogg(path, language),
            other => Err(anyhow!(
                "Unsupported audio file type '{other}'. Use a 16-bit WAV or an Ogg/Opus file"
            )),
        }
    }

    /// Splits the payload into fixed-size chunks, the way a host would stream it.
    pub fn into_stream(self) -> AudioStream<'static> {
        let chunks: Vec<Vec<u8>> = self.data.chunks(CHUNK_SIZE).map(<[u8]>::to_vec).collect();
        stream::iter(chunks).boxed()
    }
}

fn load_wav(path: &Path, language: &str) -> anyhow::Result<AudioFile> {
    let reader = hound::WavReader::open(path)
        .map_err(|e| anyhow!("Failed to open WAV file {}: {e}", path.display()))?;
    let spec = reader.spec();
    tracing::debug!("WAV spec for {}: {:?}", path.display(), spec);

    if spec.sample_format != hound::SampleFormat::Int || spec.bits_per_sample != 16 {
        return Err(anyhow!(
            "Only 16-bit integer PCM WAV files are supported (got {} bits, {:?})",
            spec.bits_per_sample,
            spec.sample_format
        ));
    }

    let sample_rate = AudioSampleRate::from_hz(spec.sample_rate)
        .ok_or_else(|| anyhow!("Unsupported sample rate: {} Hz", spec.sample_rate))?;
    let channels = AudioChannels::from_count(spec.channels)
        .ok_or_else(|| anyhow!("Unsupported channel count: {}", spec.channels))?;
    let bit_rate = AudioBitRate::from_bits(spec.bits_per_sample)
        .ok_or_else(|| anyhow!("Unsupported bit depth: {}", spec.bits_per_sample))?;

    let mut data = Vec::with_capacity(reader.len() as usize * 2);
    for sample in reader.into_samples::<i16>() {
        let sample = sample.map_err(|e| anyhow!("Failed to decode WAV sample: {e}"))?;
        data.extend_from_slice(&sample.to_le_bytes());
    }

    Ok(AudioFile {
        metadata: AudioMetadata {
            language: language.to_string(),
            format: AudioFormat::Wav,
            codec: AudioCodec::Pcm,
            bit_rate,
            sample_rate,
            channels,
        },
        data,
    })
}

fn load_ogg(path: &Path, language: &str) -> anyhow::Result<AudioFile> {
    let data = std::fs::read(path)
        .map_err(|e| anyhow!("Failed to read audio file {}: {e}", path.display()))?;

    // Opus always decodes at 48 kHz; the container carries the rest.
    Ok(AudioFile {
        metadata: AudioMetadata {
            language: language.to_string(),
            format: AudioFormat::Ogg,
            codec: AudioCodec::Opus,
            bit_rate: AudioBitRate::Bits16,
            sample_rate: AudioSampleRate::Hz48000,
            channels: AudioChannels::Mono,
        },
        data,
    })
}
