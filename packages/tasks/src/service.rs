// ABOUTME: Business-rule layer for tasks
// ABOUTME: Validates tag references and existence checks over the storage layer

use chrono::Utc;
use tracing::debug;

use tasklight_storage::StorageError;

use crate::storage::TaskStorage;
use crate::types::{Task, TaskCreateInput, TaskUpdateInput};

/// Result of a create attempt; a reference to an unknown tag is an expected
/// refusal, not an error
#[derive(Debug)]
pub enum TaskCreateOutcome {
    Created(Task),
    UnknownTag(i64),
}

#[derive(Debug)]
pub enum TaskUpdateOutcome {
    Updated(Task),
    NotFound,
    UnknownTag(i64),
}

#[derive(Debug)]
pub enum TaskDeleteOutcome {
    Deleted,
    NotFound,
}

/// Stateless orchestrator for the task lifecycle
pub struct TaskService {
    storage: TaskStorage,
}

impl TaskService {
    pub fn new(storage: TaskStorage) -> Self {
        Self { storage }
    }

    pub async fn get_task(&self, task_id: i64) -> Result<Option<Task>, StorageError> {
        self.storage.get_task(task_id).await
    }

    pub async fn list_tasks(&self) -> Result<Vec<Task>, StorageError> {
        self.storage.list_tasks().await
    }

    /// List tasks carrying any of the given tags. Unknown tag ids simply
    /// match nothing.
    pub async fn list_tasks_by_tags(&self, tag_ids: &[i64]) -> Result<Vec<Task>, StorageError> {
        self.storage.list_tasks_by_tags(tag_ids).await
    }

    /// Create a task; every referenced tag must exist
    pub async fn create_task(
        &self,
        input: TaskCreateInput,
    ) -> Result<TaskCreateOutcome, StorageError> {
        if let Some(tag_id) = self.storage.missing_tag_id(&input.tag_ids).await? {
            debug!("Refusing to create task, unknown tag: {}", tag_id);
            return Ok(TaskCreateOutcome::UnknownTag(tag_id));
        }

        let task = self.storage.create_task(&input).await?;
        Ok(TaskCreateOutcome::Created(task))
    }

    /// Apply an update to an existing task; when a tag set is provided it
    /// replaces the current associations wholesale
    pub async fn update_task(
        &self,
        task_id: i64,
        input: TaskUpdateInput,
    ) -> Result<TaskUpdateOutcome, StorageError> {
        let Some(existing) = self.storage.get_task(task_id).await? else {
            return Ok(TaskUpdateOutcome::NotFound);
        };

        if let Some(tag_ids) = &input.tag_ids {
            if let Some(tag_id) = self.storage.missing_tag_id(tag_ids).await? {
                debug!("Refusing to update task {}, unknown tag: {}", task_id, tag_id);
                return Ok(TaskUpdateOutcome::UnknownTag(tag_id));
            }
        }

        let mut updated = self
            .storage
            .update_task(&existing.merged_with(&input, Utc::now()))
            .await?;

        if let Some(tag_ids) = &input.tag_ids {
            self.storage.set_task_tags(task_id, tag_ids).await?;
        }
        updated.tags = self.storage.tags_for_task(task_id).await?;

        Ok(TaskUpdateOutcome::Updated(updated))
    }

    pub async fn delete_task(&self, task_id: i64) -> Result<TaskDeleteOutcome, StorageError> {
        if self.storage.get_task(task_id).await?.is_none() {
            return Ok(TaskDeleteOutcome::NotFound);
        }

        self.storage.delete_task(task_id).await?;
        Ok(TaskDeleteOutcome::Deleted)
    }
}
