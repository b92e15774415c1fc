use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Plain-text liveness probe at the root path.
pub async fn home_handler() -> impl IntoResponse {
    (StatusCode::OK, "recapd backend is running")
}
