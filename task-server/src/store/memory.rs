use super::{NewTask, StoreError, TaskChanges, TaskFilter, TaskStore};
use crate::models::Task;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory task store backed by a BTreeMap.
///
/// Ids are assigned from a monotonically increasing counter and never
/// reused. Concurrent updates to the same task are last-write-wins, which
/// is all the core requires of a backend.
#[derive(Debug)]
pub struct InMemoryTaskStore {
    tasks: RwLock<BTreeMap<i64, Task>>,
    next_id: AtomicI64,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn create(&self, task: NewTask) -> Result<Task, StoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let record = Task {
            id,
            title: task.title,
            description: task.description,
            status: task.status,
            owner_id: task.owner_id,
        };
        self.tasks.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn get(&self, id: i64) -> Result<Option<Task>, StoreError> {
        Ok(self.tasks.read().await.get(&id).cloned())
    }

    async fn list(&self, filter: TaskFilter) -> Result<Vec<Task>, StoreError> {
        let tasks = self.tasks.read().await;
        Ok(tasks
            .values()
            .filter(|task| match filter.owner_id {
                Some(owner_id) => task.owner_id == owner_id,
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, changes: TaskChanges) -> Result<Option<Task>, StoreError> {
        let mut tasks = self.tasks.write().await;
        let Some(task) = tasks.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(title) = changes.title {
            task.title = title;
        }
        if let Some(description) = changes.description {
            task.description = Some(description);
        }
        if let Some(status) = changes.status {
            task.status = status;
        }
        Ok(Some(task.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tasks.write().await.remove(&id).is_some())
    }
}
