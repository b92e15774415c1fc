use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use recapd::application::ports::{
    AudioExtractor, DecodingConfig, SummarizationEngine, TranscriptionEngine,
};
use recapd::application::services::SummaryPipeline;
use recapd::infrastructure::audio::FfmpegExtractor;
use recapd::infrastructure::llm::WatsonxEngine;
use recapd::infrastructure::observability::{init_tracing, TracingConfig};
use recapd::infrastructure::transcription::WhisperHttpEngine;
use recapd::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env()?;

    init_tracing(TracingConfig::from_env(), settings.server.port);

    let extractor: Arc<dyn AudioExtractor> = Arc::new(FfmpegExtractor::new());

    let transcription: Arc<dyn TranscriptionEngine> = Arc::new(WhisperHttpEngine::new(
        settings.whisper.api_key.clone(),
        settings.whisper.base_url.clone(),
        settings.whisper.model.clone(),
    ));

    let decoding = DecodingConfig {
        max_new_tokens: settings.watsonx.max_new_tokens,
        ..DecodingConfig::default()
    };
    let summarization: Arc<dyn SummarizationEngine> = Arc::new(WatsonxEngine::new(
        settings.watsonx.api_key.clone(),
        settings.watsonx.project_id.clone(),
        &settings.watsonx.region,
        settings.watsonx.model_id.clone(),
        decoding,
    ));

    let pipeline = Arc::new(SummaryPipeline::new(
        extractor,
        transcription,
        summarization,
        settings.storage.temp_dir.clone(),
    ));

    let state = AppState { pipeline };
    let router = create_router(state, settings.server.max_upload_mb);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
