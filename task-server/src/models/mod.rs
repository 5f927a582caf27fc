use serde::{Deserialize, Serialize};

/// Lifecycle state of a task
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

/// A persisted task record
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Task {
    /// Unique identifier, assigned by the store
    pub id: i64,
    /// Task title
    pub title: String,
    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Lifecycle state
    pub status: TaskStatus,
    /// Subject id of the owning principal, immutable after creation
    pub owner_id: i64,
}

/// Payload for creating a task.
///
/// There is no owner field: ownership always comes from the authenticated
/// principal, never from the client.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateTask {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl CreateTask {
    /// Shape validation, checked after authentication
    pub fn validate(&self) -> Result<(), String> {
        if self.title.is_empty() {
            return Err("title must not be empty".to_string());
        }
        Ok(())
    }
}

/// Partial update payload; absent fields are left unchanged
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct UpdateTask {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
}

impl UpdateTask {
    pub fn validate(&self) -> Result<(), String> {
        if let Some(title) = &self.title {
            if title.is_empty() {
                return Err("title must not be empty".to_string());
            }
        }
        Ok(())
    }
}
