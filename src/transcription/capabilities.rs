//! Static capability tables and the host-side support check.
//!
//! Providers only advertise these sets. Checking a request against them is the
//! caller's job, done through [`is_supported`].

use super::metadata::{AudioMetadata, AudioSampleRate};
use super::provider::SpeechProvider;

/// Languages accepted by SpeechKit v1 recognition.
pub const YANDEX_LANGUAGES: &[&str] = &[
    "de-DE", "en-US", "es-ES", "fi-FI", "fr-FR", "he-HE", "it-IT", "kk-KZ", "nl-NL", "pl-PL",
    "pt-PT", "pt-BR", "ru-RU", "sv-SE", "tr-TR", "uz-UZ",
];

/// Languages advertised by the demo provider.
pub const DEMO_LANGUAGES: &[&str] = &[
    "af-ZA", "am-ET", "ar-AE", "ar-BH", "ar-DZ", "ar-EG", "ar-IL", "ar-IQ", "ar-JO", "ar-KW",
    "ar-LB", "ar-MA", "ar-OM", "ar-PS", "ar-QA", "ar-SA", "ar-TN", "ar-YE", "az-AZ", "bg-BG",
    "bn-BD", "bn-IN", "bs-BA", "ca-ES", "cs-CZ", "da-DK", "de-AT", "de-CH", "de-DE", "el-GR",
    "en-AU", "en-CA", "en-GB", "en-GH", "en-HK", "en-IE", "en-IN", "en-KE", "en-NG", "en-NZ",
    "en-PH", "en-PK", "en-SG", "en-TZ", "en-US", "en-ZA", "es-AR", "es-BO", "es-CL", "es-CO",
    "es-CR", "es-DO", "es-EC", "es-ES", "es-GT", "es-HN", "es-MX", "es-NI", "es-PA", "es-PE",
    "es-PR", "es-PY", "es-SV", "es-US", "es-UY", "es-VE", "et-EE", "eu-ES", "fa-IR", "fi-FI",
    "fil-PH", "fr-BE", "fr-CA", "fr-CH", "fr-FR", "gl-ES", "gu-IN", "he-IL", "hi-IN", "hr-HR",
    "hu-HU", "hy-AM", "id-ID", "is-IS", "it-CH", "it-IT", "ja-JP", "jv-ID", "ka-GE", "kk-KZ",
    "km-KH", "kn-IN", "ko-KR", "lo-LA", "lt-LT", "lv-LV", "mk-MK", "ml-IN", "mn-MN", "mr-IN",
    "ms-MY", "my-MM", "ne-NP", "nl-BE", "nl-NL", "no-NO", "pa-IN", "pl-PL", "pt-BR", "pt-PT",
    "ro-RO", "ru-RU", "si-LK", "sk-SK", "sl-SI", "sq-AL", "sr-RS", "su-ID", "sv-SE", "sw-KE",
    "sw-TZ", "ta-IN", "ta-LK", "ta-MY", "ta-SG", "te-IN", "th-TH", "tr-TR", "uk-UA", "ur-IN",
    "ur-PK", "uz-UZ", "vi-VN", "zh-CN", "zh-HK", "zh-TW", "zu-ZA",
];

/// Sample rates SpeechKit accepts for LPCM input.
pub const YANDEX_SAMPLE_RATES: &[AudioSampleRate] = &[
    AudioSampleRate::Hz8000,
    AudioSampleRate::Hz16000,
    AudioSampleRate::Hz48000,
];

/// A metadata field outside the provider's advertised set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UnsupportedMetadata {
    #[error("language '{0}' is not supported")]
    Language(String),
    #[error("format '{0}' is not supported")]
    Format(String),
    #[error("codec '{0}' is not supported")]
    Codec(String),
    #[error("bit rate {0} is not supported")]
    BitRate(String),
    #[error("sample rate {0} Hz is not supported")]
    SampleRate(String),
    #[error("channel layout '{0}' is not supported")]
    Channels(String),
}

/// Checks every field of `metadata` against what `provider` advertises.
///
/// # Errors
/// Returns the first field that falls outside the advertised sets.
pub fn is_supported(
    provider: &dyn SpeechProvider,
    metadata: &AudioMetadata,
) -> Result<(), UnsupportedMetadata> {
    if !provider
        .supported_languages()
        .contains(&metadata.language.as_str())
    {
        return Err(UnsupportedMetadata::Language(metadata.language.clone()));
    }
    if !provider.supported_formats().contains(&metadata.format) {
        return Err(UnsupportedMetadata::Format(metadata.format.to_string()));
    }
    if !provider.supported_codecs().contains(&metadata.codec) {
        return Err(UnsupportedMetadata::Codec(metadata.codec.to_string()));
    }
    if !provider.supported_bit_rates().contains(&metadata.bit_rate) {
        return Err(UnsupportedMetadata::BitRate(metadata.bit_rate.to_string()));
    }
    if !provider.supported_sample_rates().contains(&metadata.sample_rate) {
        return Err(UnsupportedMetadata::SampleRate(
            metadata.sample_rate.to_string(),
        ));
    }
    if !provider.supported_channels().contains(&metadata.channels) {
        return Err(UnsupportedMetadata::Channels(metadata.channels.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::transcription::api::DemoProvider;
    use crate::transcription::metadata::{AudioBitRate, AudioChannels, AudioCodec, AudioFormat};

    fn metadata(language: &str) -> AudioMetadata {
        AudioMetadata {
            language: language.to_string(),
            format: AudioFormat::Wav,
            codec: AudioCodec::Pcm,
            bit_rate: AudioBitRate::Bits16,
            sample_rate: AudioSampleRate::Hz16000,
            channels: AudioChannels::Mono,
        }
    }

    #[test]
    fn language_tables_have_no_duplicates() {
        let yandex: HashSet<_> = YANDEX_LANGUAGES.iter().collect();
        assert_eq!(yandex.len(), YANDEX_LANGUAGES.len());
        assert_eq!(YANDEX_LANGUAGES.len(), 16);

        let demo: HashSet<_> = DEMO_LANGUAGES.iter().collect();
        assert_eq!(demo.len(), DEMO_LANGUAGES.len());
        assert!(DEMO_LANGUAGES.len() > 100);
    }

    #[test]
    fn supported_metadata_passes() {
        let provider = DemoProvider::new();
        assert_eq!(is_supported(&provider, &metadata("en-US")), Ok(()));
    }

    #[test]
    fn unknown_language_is_reported() {
        let provider = DemoProvider::new();
        assert_eq!(
            is_supported(&provider, &metadata("xx-XX")),
            Err(UnsupportedMetadata::Language("xx-XX".into()))
        );
    }

    #[test]
    fn unsupported_sample_rate_is_reported() {
        let provider = DemoProvider::new();
        let mut meta = metadata("en-US");
        meta.sample_rate = AudioSampleRate::Hz11000;
        assert_eq!(
            is_supported(&provider, &meta),
            Err(UnsupportedMetadata::SampleRate("11000".into()))
        );
    }
}
