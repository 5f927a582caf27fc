mod create;
mod delete;
mod list;
mod read;
mod update;

use crate::auth;
use crate::errors::TaskError;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use http::HeaderMap;
use log::warn;

pub(super) fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", post(create::create_handler).get(list::list_handler))
        .route(
            "/tasks/{id}",
            get(read::read_handler)
                .put(update::update_handler)
                .delete(delete::delete_handler),
        )
}

/// Pulls the raw bearer credential out of the request headers.
///
/// A missing or unprefixed Authorization header is rejected here, before
/// verification is even attempted; the client sees the same outcome as any
/// other authentication failure.
fn credential(headers: &HeaderMap) -> Result<&str, TaskError> {
    auth::bearer_token(headers).ok_or_else(|| {
        warn!("missing or malformed Authorization header");
        TaskError::Unauthenticated
    })
}
