use async_trait::async_trait;

/// External text-generation service invoked with a prepared prompt. Returns
/// the engine's raw output; cleaning happens downstream.
#[async_trait]
pub trait SummarizationEngine: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, SummarizationError>;
}

/// Fixed generation parameters, set once at process startup. Decoding is
/// always greedy so the output is deterministic for a given prompt.
#[derive(Debug, Clone)]
pub struct DecodingConfig {
    pub max_new_tokens: u32,
    pub stop_sequences: Vec<String>,
}

impl Default for DecodingConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 300,
            stop_sequences: vec!["</response>".to_string()],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
