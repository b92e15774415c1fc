use std::path::Path;

use async_trait::async_trait;

/// External speech-to-text service. The engine reads the audio file at the
/// given path; it never mutates or deletes it.
#[async_trait]
pub trait TranscriptionEngine: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("audio file unreadable: {0}")]
    AudioUnreadable(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("transcription failed: {0}")]
    TranscriptionFailed(String),
}
