mod audio_extractor;
mod summarization_engine;
mod transcription_engine;

pub use audio_extractor::{AudioExtractor, ExtractionError};
pub use summarization_engine::{DecodingConfig, SummarizationEngine, SummarizationError};
pub use transcription_engine::{TranscriptionEngine, TranscriptionError};
