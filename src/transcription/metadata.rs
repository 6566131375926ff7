//! Audio metadata supplied alongside every transcription request.
//!
//! The enums here mirror the value ladders a host can advertise and request:
//! container formats, codecs, bit depths, sample rates and channel layouts.

use serde::{Deserialize, Serialize};

/// Audio container format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Wav,
    Ogg,
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Wav => write!(f, "wav"),
            Self::Ogg => write!(f, "ogg"),
        }
    }
}

/// Audio codec of the submitted payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioCodec {
    Pcm,
    Opus,
}

impl std::fmt::Display for AudioCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pcm => write!(f, "pcm"),
            Self::Opus => write!(f, "opus"),
        }
    }
}

/// Bits per sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioBitRate {
    Bits8,
    Bits16,
    Bits24,
    Bits32,
}

impl AudioBitRate {
    pub const ALL: [Self; 4] = [Self::Bits8, Self::Bits16, Self::Bits24, Self::Bits32];

    pub fn bits(self) -> u16 {
        match self {
            Self::Bits8 => 8,
            Self::Bits16 => 16,
            Self::Bits24 => 24,
            Self::Bits32 => 32,
        }
    }

    pub fn from_bits(bits: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.bits() == bits)
    }
}

impl std::fmt::Display for AudioBitRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioSampleRate {
    Hz8000,
    Hz11000,
    Hz16000,
    Hz18900,
    Hz22000,
    Hz32000,
    Hz37800,
    Hz44100,
    Hz48000,
}

impl AudioSampleRate {
    pub const ALL: [Self; 9] = [
        Self::Hz8000,
        Self::Hz11000,
        Self::Hz16000,
        Self::Hz18900,
        Self::Hz22000,
        Self::Hz32000,
        Self::Hz37800,
        Self::Hz44100,
        Self::Hz48000,
    ];

    pub fn hz(self) -> u32 {
        match self {
            Self::Hz8000 => 8000,
            Self::Hz11000 => 11000,
            Self::Hz16000 => 16000,
            Self::Hz18900 => 18900,
            Self::Hz22000 => 22000,
            Self::Hz32000 => 32000,
            Self::Hz37800 => 37800,
            Self::Hz44100 => 44100,
            Self::Hz48000 => 48000,
        }
    }

    pub fn from_hz(hz: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.hz() == hz)
    }
}

impl std::fmt::Display for AudioSampleRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hz())
    }
}

/// Channel layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioChannels {
    Mono,
    Stereo,
}

impl AudioChannels {
    pub fn count(self) -> u16 {
        match self {
            Self::Mono => 1,
            Self::Stereo => 2,
        }
    }

    pub fn from_count(count: u16) -> Option<Self> {
        match count {
            1 => Some(Self::Mono),
            2 => Some(Self::Stereo),
            _ => None,
        }
    }
}

impl std::fmt::Display for AudioChannels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mono => write!(f, "mono"),
            Self::Stereo => write!(f, "stereo"),
        }
    }
}

/// Describes the audio that accompanies a single transcription call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioMetadata {
    /// Language-region tag, e.g. "ru-RU"
    pub language: String,
    pub format: AudioFormat,
    pub codec: AudioCodec,
    pub bit_rate: AudioBitRate,
    pub sample_rate: AudioSampleRate,
    pub channels: AudioChannels,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rate_lookup() {
        assert_eq!(AudioSampleRate::from_hz(16000), Some(AudioSampleRate::Hz16000));
        assert_eq!(AudioSampleRate::from_hz(12345), None);
        for rate in AudioSampleRate::ALL {
            assert_eq!(AudioSampleRate::from_hz(rate.hz()), Some(rate));
        }
    }

    #[test]
    fn test_bit_rate_and_channels_lookup() {
        assert_eq!(AudioBitRate::from_bits(16), Some(AudioBitRate::Bits16));
        assert_eq!(AudioBitRate::from_bits(12), None);
        assert_eq!(AudioChannels::from_count(1), Some(AudioChannels::Mono));
        assert_eq!(AudioChannels::from_count(6), None);
    }

    #[test]
    fn test_display_values() {
        assert_eq!(AudioCodec::Pcm.to_string(), "pcm");
        assert_eq!(AudioFormat::Ogg.to_string(), "ogg");
        assert_eq!(AudioSampleRate::Hz48000.to_string(), "48000");
        assert_eq!(AudioChannels::Stereo.to_string(), "stereo");
    }
}
