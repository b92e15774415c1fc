use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart;

use crate::application::ports::{TranscriptionEngine, TranscriptionError};

/// Speech-to-text over the OpenAI-compatible `/audio/transcriptions`
/// endpoint. Works against api.openai.com or any local Whisper server that
/// speaks the same contract.
pub struct WhisperHttpEngine {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl WhisperHttpEngine {
    pub fn new(api_key: String, base_url: Option<String>, model: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            model: model.unwrap_or_else(|| "whisper-1".to_string()),
        }
    }
}

#[async_trait]
impl TranscriptionEngine for WhisperHttpEngine {
    async fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        let audio_data = tokio::fs::read(audio_path)
            .await
            .map_err(|e| TranscriptionError::AudioUnreadable(e.to_string()))?;

        let file_name = audio_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.mp3")
            .to_string();

        let file_part = multipart::Part::bytes(audio_data)
            .file_name(file_name)
            .mime_str("application/octet-stream")
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .text("model", self.model.clone())
            .text("response_format", "text")
            .part("file", file_part);

        let url = format!("{}/audio/transcriptions", self.base_url);
        tracing::debug!(model = %self.model, "Sending audio to transcription API");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("request: {}", e)))?;

        // Transport faults are ApiRequestFailed; an error status is the
        // engine itself reporting that it could not transcribe.
        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranscriptionError::TranscriptionFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let transcript = response
            .text()
            .await
            .map_err(|e| TranscriptionError::ApiRequestFailed(format!("body: {}", e)))?;

        tracing::info!(chars = transcript.len(), "Transcription completed");

        Ok(transcript.trim().to_string())
    }
}
