use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioExtractor, ExtractionError};

/// FFmpeg-based audio track extraction. Drops the video stream and encodes
/// the audio to mp3, overwriting any existing output file.
pub struct FfmpegExtractor {
    binary: String,
}

impl FfmpegExtractor {
    pub fn new() -> Self {
        Self::with_binary("ffmpeg")
    }

    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfmpegExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioExtractor for FfmpegExtractor {
    async fn extract(&self, video_path: &Path, audio_path: &Path) -> Result<(), ExtractionError> {
        let output = Command::new(&self.binary)
            .arg("-i")
            .arg(video_path)
            .args(["-vn", "-acodec", "libmp3lame", "-f", "mp3", "-y"])
            .arg(audio_path)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    ExtractionError::TranscoderNotFound(self.binary.clone())
                } else {
                    ExtractionError::Io(e)
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExtractionError::TranscodingFailed(
                stderr.lines().last().unwrap_or("unknown error").to_string(),
            ));
        }

        tracing::debug!(audio = %audio_path.display(), "Audio track extracted");
        Ok(())
    }
}
