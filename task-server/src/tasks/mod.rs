//! Task operation dispatcher.
//!
//! Sequences every operation the same way: authenticate first, then shape
//! validation, then existence, then the authorization decision, then the
//! store call. Authentication failures are guaranteed to happen before any
//! store access, so a rejected request never causes a partial write.

use crate::auth::policy::{authorize, TaskAction};
use crate::auth::{self, Principal, Role};
use crate::errors::TaskError;
use crate::models::{CreateTask, Task, UpdateTask};
use crate::state::AppState;
use crate::store::{NewTask, StoreError, TaskChanges, TaskFilter};
use log::warn;

/// Establishes the caller's identity from the raw credential.
///
/// The internal rejection reason is logged and then collapsed: clients see
/// the same unauthenticated outcome whether the token was malformed,
/// tampered with, or expired.
fn authenticate(state: &AppState, credential: &str) -> Result<Principal, TaskError> {
    auth::verify(credential, &state.decoding_key, state.settings.auth.leeway).map_err(|e| {
        warn!("credential rejected: {}", e);
        TaskError::Unauthenticated
    })
}

/// Fetches a task, reporting absence before any ownership evaluation
async fn fetch(state: &AppState, id: i64) -> Result<Task, TaskError> {
    state
        .store
        .get(id)
        .await
        .map_err(store_error)?
        .ok_or(TaskError::NotFound)
}

fn store_error(e: StoreError) -> TaskError {
    TaskError::Store(e.to_string())
}

/// Creates a task owned by the authenticated principal.
///
/// The owner id always comes from the credential; the payload has no owner
/// field for a client to supply.
pub async fn create(
    state: &AppState,
    credential: &str,
    payload: CreateTask,
) -> Result<Task, TaskError> {
    let principal = authenticate(state, credential)?;
    payload.validate().map_err(TaskError::Validation)?;

    let task = NewTask {
        title: payload.title,
        description: payload.description,
        status: payload.status.unwrap_or_default(),
        owner_id: principal.subject_id,
    };
    state.store.create(task).await.map_err(store_error)
}

/// Lists tasks visible to the principal: admins see every task, users see
/// only their own.
pub async fn list(state: &AppState, credential: &str) -> Result<Vec<Task>, TaskError> {
    let principal = authenticate(state, credential)?;

    let filter = match principal.role {
        Role::Admin => TaskFilter::default(),
        Role::User => TaskFilter {
            owner_id: Some(principal.subject_id),
        },
    };
    state.store.list(filter).await.map_err(store_error)
}

/// Returns a single task after the read authorization check
pub async fn get(state: &AppState, credential: &str, id: i64) -> Result<Task, TaskError> {
    let principal = authenticate(state, credential)?;
    let task = fetch(state, id).await?;
    authorize(&principal, task.owner_id, TaskAction::Read)?;
    Ok(task)
}

/// Applies partial changes to a task. Owner-only: the admin override does
/// not apply to update.
pub async fn update(
    state: &AppState,
    credential: &str,
    id: i64,
    payload: UpdateTask,
) -> Result<Task, TaskError> {
    let principal = authenticate(state, credential)?;
    payload.validate().map_err(TaskError::Validation)?;

    let task = fetch(state, id).await?;
    authorize(&principal, task.owner_id, TaskAction::Update)?;

    let changes = TaskChanges {
        title: payload.title,
        description: payload.description,
        status: payload.status,
    };
    state
        .store
        .update(id, changes)
        .await
        .map_err(store_error)?
        // The task was present at the existence check; a concurrent delete
        // in between reports as not-found, same as the store saw it.
        .ok_or(TaskError::NotFound)
}

/// Deletes a task after the delete authorization check
pub async fn delete(state: &AppState, credential: &str, id: i64) -> Result<(), TaskError> {
    let principal = authenticate(state, credential)?;
    let task = fetch(state, id).await?;
    authorize(&principal, task.owner_id, TaskAction::Delete)?;

    if state.store.delete(id).await.map_err(store_error)? {
        Ok(())
    } else {
        Err(TaskError::NotFound)
    }
}
