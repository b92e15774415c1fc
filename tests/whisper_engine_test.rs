use std::path::Path;

use axum::response::IntoResponse;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use recapd::application::ports::{TranscriptionEngine, TranscriptionError};
use recapd::infrastructure::transcription::WhisperHttpEngine;

async fn start_mock_whisper_server(
    response_status: u16,
    response_body: &'static str,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/audio/transcriptions",
        post(move || async move {
            let status = axum::http::StatusCode::from_u16(response_status).unwrap();
            (status, response_body).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn write_audio_fixture(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("notes.wav");
    std::fs::write(&path, b"fake audio bytes").unwrap();
    path
}

#[tokio::test]
async fn given_valid_audio_file_when_transcribing_then_returns_trimmed_text() {
    let (base_url, shutdown_tx) =
        start_mock_whisper_server(200, "  Alice will send the report by Friday.\n").await;
    let dir = tempfile::TempDir::new().unwrap();
    let audio_path = write_audio_fixture(&dir);

    let engine = WhisperHttpEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(&audio_path).await;

    assert_eq!(result.unwrap(), "Alice will send the report by Friday.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_engine_error_status_when_transcribing_then_returns_transcription_failed() {
    let (base_url, shutdown_tx) =
        start_mock_whisper_server(500, r#"{"error": "model overloaded"}"#).await;
    let dir = tempfile::TempDir::new().unwrap();
    let audio_path = write_audio_fixture(&dir);

    let engine = WhisperHttpEngine::new("test-key".to_string(), Some(base_url), None);
    let result = engine.transcribe(&audio_path).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::TranscriptionFailed(_))
    ));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_server_when_transcribing_then_returns_api_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let audio_path = write_audio_fixture(&dir);

    // Port 9 (discard) is not listening; the request itself fails.
    let engine = WhisperHttpEngine::new(
        "test-key".to_string(),
        Some("http://127.0.0.1:9".to_string()),
        None,
    );
    let result = engine.transcribe(&audio_path).await;

    assert!(matches!(
        result,
        Err(TranscriptionError::ApiRequestFailed(_))
    ));
}

#[tokio::test]
async fn given_missing_audio_file_when_transcribing_then_returns_unreadable_error() {
    let engine = WhisperHttpEngine::new(
        "test-key".to_string(),
        Some("http://127.0.0.1:9".to_string()),
        None,
    );

    let result = engine
        .transcribe(Path::new("/nonexistent/audio.wav"))
        .await;

    assert!(matches!(result, Err(TranscriptionError::AudioUnreadable(_))));
}

#[tokio::test]
async fn given_valid_audio_file_when_transcribing_then_file_is_left_in_place() {
    let (base_url, shutdown_tx) = start_mock_whisper_server(200, "transcript").await;
    let dir = tempfile::TempDir::new().unwrap();
    let audio_path = write_audio_fixture(&dir);

    let engine = WhisperHttpEngine::new("test-key".to_string(), Some(base_url), None);
    engine.transcribe(&audio_path).await.unwrap();

    assert!(audio_path.exists());
    assert_eq!(std::fs::read(&audio_path).unwrap(), b"fake audio bytes");
    shutdown_tx.send(()).ok();
}
