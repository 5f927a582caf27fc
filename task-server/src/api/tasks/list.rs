use super::credential;
use crate::state::AppState;
use crate::tasks;
use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use http::{HeaderMap, StatusCode};

pub(super) async fn list_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let raw = match credential(&headers) {
        Ok(raw) => raw,
        Err(err) => return err.into_response(),
    };
    match tasks::list(&state, raw).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(err) => err.into_response(),
    }
}
