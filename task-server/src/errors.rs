use axum::response::IntoResponse;
use axum::Json;
use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Terminal outcomes for a task operation.
///
/// Every request either completes or fails with exactly one of these kinds.
/// The kind is always distinguishable by the caller, but `Unauthenticated`
/// deliberately carries no detail about why the credential was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaskError {
    #[error("authentication required")]
    Unauthenticated,
    #[error("access denied")]
    Forbidden,
    #[error("task not found")]
    NotFound,
    #[error("{0}")]
    Validation(String),
    #[error("internal server error")]
    Store(String),
}

impl TaskError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<crate::auth::policy::Forbidden> for TaskError {
    fn from(_: crate::auth::policy::Forbidden) -> Self {
        TaskError::Forbidden
    }
}

impl IntoResponse for TaskError {
    fn into_response(self) -> axum::response::Response {
        // Store failures are logged with their cause but surfaced opaquely
        if let Self::Store(detail) = &self {
            log::error!("store failure: {}", detail);
        }
        let status_code = self.status_code();
        let body = json!({
            "detail": self.to_string(),
        });
        (status_code, Json(body)).into_response()
    }
}
