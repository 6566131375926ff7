/// Failure kinds a provider can hit while serving one transcription call.
///
/// None of these escape `transcribe`; they are folded into
/// [`TranscriptionResult::Error`](super::TranscriptionResult::Error).
#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("Timeout for yandex speech kit API")]
    Connectivity(#[source] Option<reqwest::Error>),

    /// The request could not be assembled, e.g. a key that is not a valid header value
    #[error("Failed to build yandex speech kit API request: {0}")]
    InvalidRequest(#[source] reqwest::Error),

    #[error("[{status}] {code} {message}")]
    Rejected {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Malformed response from yandex speech kit API (status {status}): {detail}")]
    MalformedResponse { status: u16, detail: String },

    #[error("Audio stream exceeds the maximum buffered size of {limit} bytes")]
    PayloadTooLarge { limit: usize },
}

pub type Result<T> = std::result::Result<T, TranscriptionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_message_embeds_status_code_and_text() {
        let err = TranscriptionError::Rejected {
            status: 401,
            code: "UNAUTHORIZED".into(),
            message: "bad key".into(),
        };
        assert_eq!(err.to_string(), "[401] UNAUTHORIZED bad key");
    }

    #[test]
    fn connectivity_message_is_fixed() {
        assert_eq!(
            TranscriptionError::Connectivity(None).to_string(),
            "Timeout for yandex speech kit API"
        );
    }
}
