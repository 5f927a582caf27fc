use crate::state::AppState;
use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};

/// Basic health check handler
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
