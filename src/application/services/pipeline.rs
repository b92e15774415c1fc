use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    AudioExtractor, ExtractionError, SummarizationEngine, SummarizationError, TranscriptionEngine,
    TranscriptionError,
};
use crate::application::services::build_summary_prompt;
use crate::domain::{clean_summary, MediaKind, MediaSource};
use crate::infrastructure::storage::TempArtifacts;

/// The upload-to-summary pipeline. Engine handles are built once at startup
/// and shared across requests; everything else here is per-request.
pub struct SummaryPipeline {
    extractor: Arc<dyn AudioExtractor>,
    transcription: Arc<dyn TranscriptionEngine>,
    summarization: Arc<dyn SummarizationEngine>,
    temp_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingNotes {
    pub transcript: String,
    pub summary: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("saving upload: {0}")]
    Upload(std::io::Error),
    #[error("audio extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("transcription: {0}")]
    Transcription(#[from] TranscriptionError),
    #[error("summarization: {0}")]
    Summarization(#[from] SummarizationError),
}

impl SummaryPipeline {
    pub fn new(
        extractor: Arc<dyn AudioExtractor>,
        transcription: Arc<dyn TranscriptionEngine>,
        summarization: Arc<dyn SummarizationEngine>,
        temp_dir: PathBuf,
    ) -> Self {
        Self {
            extractor,
            transcription,
            summarization,
            temp_dir,
        }
    }

    /// Run the full pipeline for one upload. Temporary artifacts are removed
    /// before this returns, on the error path as well as the happy path.
    pub async fn process(
        &self,
        data: &[u8],
        original_filename: &str,
    ) -> Result<MeetingNotes, PipelineError> {
        let mut artifacts = TempArtifacts::new(self.temp_dir.clone());
        let outcome = self.run(data, original_filename, &mut artifacts).await;
        artifacts.cleanup_all();
        outcome
    }

    async fn run(
        &self,
        data: &[u8],
        original_filename: &str,
        artifacts: &mut TempArtifacts,
    ) -> Result<MeetingNotes, PipelineError> {
        let extension = Path::new(original_filename)
            .extension()
            .and_then(|e| e.to_str());
        let upload_path = artifacts
            .save(data, extension)
            .map_err(PipelineError::Upload)?;

        let source = self.normalize(&upload_path, artifacts).await?;

        let transcript = self.transcription.transcribe(source.audio_path()).await?;
        tracing::info!(chars = transcript.len(), "Transcription completed");

        let prompt = build_summary_prompt(&transcript);
        let draft = self.summarization.generate(&prompt).await?;
        let summary = clean_summary(&draft);
        tracing::info!(chars = summary.len(), "Summary generated");

        Ok(MeetingNotes {
            transcript,
            summary,
        })
    }

    /// Classify the saved upload once and produce the audio input for
    /// transcription. Video uploads get a distinct extracted track that is
    /// registered for cleanup; audio uploads are aliased, not copied.
    async fn normalize(
        &self,
        upload_path: &Path,
        artifacts: &mut TempArtifacts,
    ) -> Result<MediaSource, PipelineError> {
        match MediaKind::from_path(upload_path) {
            MediaKind::Video => {
                let audio_path = artifacts.derived_path("mp3");
                tracing::debug!(
                    video = %upload_path.display(),
                    audio = %audio_path.display(),
                    "Extracting audio track"
                );
                self.extractor.extract(upload_path, &audio_path).await?;
                artifacts.register_derived(audio_path.clone());
                Ok(MediaSource::ExtractedAudio {
                    audio: audio_path,
                    source_video: upload_path.to_path_buf(),
                })
            }
            MediaKind::Audio => Ok(MediaSource::RawAudio {
                audio: upload_path.to_path_buf(),
            }),
        }
    }
}
