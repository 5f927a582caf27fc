use super::credential;
use crate::models::CreateTask;
use crate::state::AppState;
use crate::tasks;
use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use http::{HeaderMap, StatusCode};

pub(super) async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateTask>,
) -> Response {
    let raw = match credential(&headers) {
        Ok(raw) => raw,
        Err(err) => return err.into_response(),
    };
    match tasks::create(&state, raw, payload).await {
        Ok(task) => (StatusCode::CREATED, Json(task)).into_response(),
        Err(err) => err.into_response(),
    }
}
