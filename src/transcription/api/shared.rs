//! Shared utilities for transcription API providers.

use futures::StreamExt;

use crate::transcription::error::{Result, TranscriptionError};
use crate::transcription::provider::AudioStream;

/// Drains `stream` into one contiguous buffer, preserving chunk order.
///
/// Stops at the first chunk that pushes the total past `limit` bytes.
///
/// # Errors
/// - `PayloadTooLarge` if the stream holds more than `limit` bytes
pub async fn buffer_stream(mut stream: AudioStream<'_>, limit: usize) -> Result<Vec<u8>> {
    let mut audio_data = Vec::new();

    while let Some(chunk) = stream.next().await {
        if audio_data.len() + chunk.len() > limit {
            tracing::warn!(
                "Audio stream exceeded {} bytes after {} buffered bytes",
                limit,
                audio_data.len()
            );
            return Err(TranscriptionError::PayloadTooLarge { limit });
        }
        audio_data.extend_from_slice(&chunk);
    }

    Ok(audio_data)
}

/// Query-string form of a boolean flag.
pub fn flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    #[tokio::test]
    async fn buffer_preserves_chunk_order() {
        let chunks = vec![b"ab".to_vec(), Vec::new(), b"cde".to_vec(), b"f".to_vec()];
        let data = buffer_stream(stream::iter(chunks).boxed(), 1024)
            .await
            .unwrap();
        assert_eq!(data, b"abcdef");
    }

    #[tokio::test]
    async fn buffer_accepts_empty_stream() {
        let data = buffer_stream(stream::empty().boxed(), 1024).await.unwrap();
        assert!(data.is_empty());
    }

    #[tokio::test]
    async fn buffer_accepts_exactly_the_limit() {
        let chunks = vec![vec![0u8; 4], vec![1u8; 4]];
        let data = buffer_stream(stream::iter(chunks).boxed(), 8).await.unwrap();
        assert_eq!(data.len(), 8);
    }

    #[tokio::test]
    async fn buffer_rejects_oversized_stream() {
        let chunks = vec![vec![0u8; 6], vec![0u8; 6]];
        let err = buffer_stream(stream::iter(chunks).boxed(), 8)
            .await
            .unwrap_err();
        assert!(matches!(err, TranscriptionError::PayloadTooLarge { limit: 8 }));
    }

    #[test]
    fn flags_are_lowercase_words() {
        assert_eq!(flag(true), "true");
        assert_eq!(flag(false), "false");
    }
}
