//! Yandex SpeechKit v1 synchronous recognition.
//!
//! The whole audio stream is buffered and sent as the raw body of a single POST.
//! Recognition parameters travel in the query string and the key in an
//! `Api-Key` authorization header.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use super::shared::{buffer_stream, flag};
use crate::config::YandexConfig;
use crate::transcription::capabilities::{YANDEX_LANGUAGES, YANDEX_SAMPLE_RATES};
use crate::transcription::error::{Result, TranscriptionError};
use crate::transcription::metadata::{
    AudioBitRate, AudioChannels, AudioCodec, AudioFormat, AudioMetadata, AudioSampleRate,
};
use crate::transcription::provider::{
    AudioStream, ProviderKind, SpeechProvider, TranscriptionResult,
};

pub const YANDEX_API_URL: &str = "https://stt.api.cloud.yandex.net/speech/v1/stt:recognize";

/// Deadline for one request, from send until the body is fully read.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Successful recognition body
#[derive(Debug, Deserialize)]
struct RecognitionResponse {
    result: String,
}

/// Error body returned with any non-200 status
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error_code: String,
    error_message: String,
}

pub struct YandexSttProvider {
    client: reqwest::Client,
    config: YandexConfig,
    endpoint: String,
    timeout: Duration,
}

impl YandexSttProvider {
    /// Creates a provider that shares the host's HTTP client.
    #[must_use]
    pub fn new(client: reqwest::Client, config: YandexConfig) -> Self {
        Self {
            client,
            config,
            endpoint: YANDEX_API_URL.to_owned(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Override the recognition endpoint. Used by tests against a local server.
    #[must_use]
    pub fn with_endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = url.into();
        self
    }

    /// Override the request deadline.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the query parameters for one request.
    ///
    /// LPCM needs an explicit sample rate; Ogg/Opus carries it in the container.
    pub fn query_params(&self, metadata: &AudioMetadata) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("lang", metadata.language.clone()),
            ("topic", self.config.topic.id().to_string()),
            ("profanityFilter", flag(self.config.profanity_filter).to_string()),
            ("rawResults", flag(self.config.raw_results).to_string()),
        ];

        match metadata.codec {
            AudioCodec::Pcm => {
                params.push(("format", "lpcm".to_string()));
                params.push(("sampleRateHertz", metadata.sample_rate.hz().to_string()));
            }
            AudioCodec::Opus => params.push(("format", "oggopus".to_string())),
        }

        params
    }

    async fn recognize(&self, metadata: AudioMetadata, stream: AudioStream<'_>) -> Result<String> {
        let audio_data = buffer_stream(stream, self.config.max_audio_bytes).await?;
        let params = self.query_params(&metadata);

        tracing::debug!(
            "SpeechKit API Call:\n  URL: {}\n  Method: POST\n  Headers:\n    Authorization: Api-Key <redacted>\n  Query: {:?}\n  Body: {} bytes",
            self.endpoint,
            params,
            audio_data.len()
        );

        let exchange = async {
            let response = self
                .client
                .post(&self.endpoint)
                .header(AUTHORIZATION, format!("Api-Key {}", self.config.api_key))
                .query(&params)
                .body(audio_data)
                .send()
                .await?;
            let status = response.status();
            let url = response.url().clone();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, url, body))
        };

        let (status, url, body) = match tokio::time::timeout(self.timeout, exchange).await {
            Ok(Ok(parts)) => parts,
            Ok(Err(e)) if e.is_builder() => {
                tracing::error!("Failed to build SpeechKit request: {e}");
                return Err(TranscriptionError::InvalidRequest(e));
            }
            Ok(Err(e)) => {
                tracing::error!("Timeout for yandex speech kit API: {e}");
                return Err(TranscriptionError::Connectivity(Some(e)));
            }
            Err(_) => {
                tracing::error!(
                    "Timeout for yandex speech kit API after {:?}",
                    self.timeout
                );
                return Err(TranscriptionError::Connectivity(None));
            }
        };

        interpret_response(status, &url, &body)
    }
}

/// Maps a completed HTTP exchange onto a transcript or an error.
fn interpret_response(status: StatusCode, url: &Url, body: &[u8]) -> Result<String> {
    if status != StatusCode::OK {
        let error: ApiErrorResponse = serde_json::from_slice(body).map_err(|e| {
            tracing::error!("Error {} on load URL {}. Unparseable body: {e}", status.as_u16(), url);
            TranscriptionError::MalformedResponse {
                status: status.as_u16(),
                detail: e.to_string(),
            }
        })?;
        tracing::error!(
            "Error {} on load URL {}. Response {:?}",
            status.as_u16(),
            url,
            error
        );
        return Err(TranscriptionError::Rejected {
            status: status.as_u16(),
            code: error.error_code,
            message: error.error_message,
        });
    }

    let recognition: RecognitionResponse = serde_json::from_slice(body).map_err(|e| {
        tracing::error!("Failed to parse SpeechKit response from {url}: {e}");
        TranscriptionError::MalformedResponse {
            status: status.as_u16(),
            detail: e.to_string(),
        }
    })?;

    tracing::debug!(
        "SpeechKit API Response:\n  Status: Success\n  Transcription length: {} characters",
        recognition.result.chars().count()
    );

    Ok(recognition.result)
}

impl std::fmt::Debug for YandexSttProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YandexSttProvider")
            .field("endpoint", &self.endpoint)
            .field("topic", &self.config.topic)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl SpeechProvider for YandexSttProvider {
    fn name(&self) -> &'static str {
        ProviderKind::Yandex.name()
    }

    fn supported_languages(&self) -> &'static [&'static str] {
        YANDEX_LANGUAGES
    }

    fn supported_formats(&self) -> &'static [AudioFormat] {
        &[AudioFormat::Wav, AudioFormat::Ogg]
    }

    fn supported_codecs(&self) -> &'static [AudioCodec] {
        &[AudioCodec::Pcm, AudioCodec::Opus]
    }

    fn supported_bit_rates(&self) -> &'static [AudioBitRate] {
        &[AudioBitRate::Bits8, AudioBitRate::Bits16]
    }

    fn supported_sample_rates(&self) -> &'static [AudioSampleRate] {
        YANDEX_SAMPLE_RATES
    }

    fn supported_channels(&self) -> &'static [AudioChannels] {
        &[AudioChannels::Mono]
    }

    fn transcribe<'a>(
        &'a self,
        metadata: AudioMetadata,
        stream: AudioStream<'a>,
    ) -> Pin<Box<dyn Future<Output = TranscriptionResult> + Send + 'a>> {
        Box::pin(async move { self.recognize(metadata, stream).await.into() })
    }
}
