use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub transcript: String,
    pub summary: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accept one uploaded media file and return its transcript and summary.
/// A request without a `file` field is rejected before any temporary
/// artifact is created.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    let field = loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => break field,
            Ok(Some(_)) => continue,
            Ok(None) => {
                tracing::warn!("Upload request with no file field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No file uploaded".to_string(),
                    }),
                )
                    .into_response();
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read multipart: {}", e),
                    }),
                )
                    .into_response();
            }
        }
    };

    let filename = field.file_name().unwrap_or("upload").to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: format!("Failed to read file: {}", e),
                }),
            )
                .into_response();
        }
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "Processing file upload");

    match state.pipeline.process(&data, &filename).await {
        Ok(notes) => (
            StatusCode::OK,
            Json(UploadResponse {
                transcript: notes.transcript,
                summary: notes.summary,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, filename = %filename, "Upload pipeline failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
