use std::path::Path;

use async_trait::async_trait;

/// External transcoding operation: pull the audio track out of a video file
/// and write it to `audio_path`.
#[async_trait]
pub trait AudioExtractor: Send + Sync {
    async fn extract(&self, video_path: &Path, audio_path: &Path) -> Result<(), ExtractionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("transcoder not found: {0}")]
    TranscoderNotFound(String),
    #[error("transcoding failed: {0}")]
    TranscodingFailed(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
