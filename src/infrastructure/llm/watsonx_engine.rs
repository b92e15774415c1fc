use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DecodingConfig, SummarizationEngine, SummarizationError};

const GENERATION_API_VERSION: &str = "2024-05-31";

/// Text generation against the IBM watsonx.ai foundation-model API. The
/// decoding configuration is fixed at construction and sent with every call.
pub struct WatsonxEngine {
    client: reqwest::Client,
    api_key: String,
    project_id: String,
    base_url: String,
    model_id: String,
    decoding: DecodingConfig,
}

impl WatsonxEngine {
    pub fn new(
        api_key: String,
        project_id: String,
        region: &str,
        model_id: String,
        decoding: DecodingConfig,
    ) -> Self {
        Self::with_base_url(
            api_key,
            project_id,
            format!("https://{}.ml.cloud.ibm.com", region),
            model_id,
            decoding,
        )
    }

    pub fn with_base_url(
        api_key: String,
        project_id: String,
        base_url: String,
        model_id: String,
        decoding: DecodingConfig,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            project_id,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_id,
            decoding,
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{}/ml/v1/text/generation?version={}",
            self.base_url, GENERATION_API_VERSION
        )
    }
}

#[async_trait]
impl SummarizationEngine for WatsonxEngine {
    async fn generate(&self, prompt: &str) -> Result<String, SummarizationError> {
        let body = GenerationRequest {
            model_id: &self.model_id,
            project_id: &self.project_id,
            input: prompt,
            parameters: GenerationParameters {
                decoding_method: "greedy",
                max_new_tokens: self.decoding.max_new_tokens,
                stop_sequences: &self.decoding.stop_sequences,
            },
        };

        tracing::debug!(model = %self.model_id, "Sending prompt to watsonx generation API");

        let response = self
            .client
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SummarizationError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(SummarizationError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let payload: GenerationResponse = response
            .json()
            .await
            .map_err(|e| SummarizationError::InvalidResponse(format!("body: {}", e)))?;

        let text = payload
            .results
            .into_iter()
            .map(|r| r.generated_text)
            .find(|t| !t.is_empty())
            .ok_or_else(|| {
                SummarizationError::InvalidResponse("no generated text in response".to_string())
            })?;

        tracing::info!(chars = text.len(), "Generation completed");

        Ok(text)
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    model_id: &'a str,
    project_id: &'a str,
    input: &'a str,
    parameters: GenerationParameters<'a>,
}

#[derive(Debug, Serialize)]
struct GenerationParameters<'a> {
    decoding_method: &'a str,
    max_new_tokens: u32,
    stop_sequences: &'a [String],
}

#[derive(Debug, Deserialize)]
struct GenerationResponse {
    #[serde(default)]
    results: Vec<GenerationResult>,
}

#[derive(Debug, Deserialize)]
struct GenerationResult {
    generated_text: String,
}
