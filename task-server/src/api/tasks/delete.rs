use super::credential;
use crate::state::AppState;
use crate::tasks;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use http::{HeaderMap, StatusCode};

pub(super) async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let raw = match credential(&headers) {
        Ok(raw) => raw,
        Err(err) => return err.into_response(),
    };
    match tasks::delete(&state, raw, id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
