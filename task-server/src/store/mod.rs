use crate::models::{Task, TaskStatus};
use thiserror::Error;

pub mod memory;

/// Errors surfaced by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Fields for a new task. The owner id is set by the dispatcher from the
/// authenticated principal; client payloads have no way to supply it.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub owner_id: i64,
}

/// Partial field changes for an update; `None` leaves a field unchanged.
/// The owner id is absent on purpose: it is immutable after creation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

/// Listing filter; `owner_id: None` means all tasks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TaskFilter {
    pub owner_id: Option<i64>,
}

/// Store trait defining the interface for all task persistence backends.
///
/// The authorization core treats persistence as an opaque key-indexed
/// collaborator: it sequences calls against this trait and imposes no
/// ordering or atomicity guarantees beyond what the backend provides.
/// Implementations must be thread-safe (Send + Sync) so a single instance
/// can be shared across concurrent request handlers.
#[async_trait::async_trait]
pub trait TaskStore: Send + Sync {
    /// Persist a new task, assigning it a unique id
    async fn create(&self, task: NewTask) -> Result<Task, StoreError>;

    /// Fetch a task by id, or None if absent
    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError>;

    /// List tasks matching the filter
    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, StoreError>;

    /// Apply partial changes to a task, or None if absent
    async fn update(&self, id: i64, changes: TaskChanges) -> Result<Option<Task>, StoreError>;

    /// Remove a task by id; returns whether it existed
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
