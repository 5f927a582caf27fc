use super::credential;
use crate::models::UpdateTask;
use crate::state::AppState;
use crate::tasks;
use axum::{
    extract::{Json, Path, State},
    response::{IntoResponse, Response},
};
use http::{HeaderMap, StatusCode};

pub(super) async fn update_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(payload): Json<UpdateTask>,
) -> Response {
    let raw = match credential(&headers) {
        Ok(raw) => raw,
        Err(err) => return err.into_response(),
    };
    match tasks::update(&state, raw, id, payload).await {
        Ok(task) => (StatusCode::OK, Json(task)).into_response(),
        Err(err) => err.into_response(),
    }
}
