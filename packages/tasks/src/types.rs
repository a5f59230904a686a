// ABOUTME: Task type definitions
// ABOUTME: Structures for tasks and their tag associations

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tasklight_tags::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    #[serde(rename = "dueDate")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub tags: Vec<Tag>,
}

impl Task {
    /// Build the updated value of this task without mutating the stored one.
    /// Tag associations are replaced separately.
    pub fn merged_with(&self, input: &TaskUpdateInput, now: DateTime<Utc>) -> Task {
        Task {
            id: self.id,
            title: input.title.clone().unwrap_or_else(|| self.title.clone()),
            description: input
                .description
                .clone()
                .or_else(|| self.description.clone()),
            status: input.status.unwrap_or(self.status),
            due_date: input.due_date.or(self.due_date),
            created_at: self.created_at,
            updated_at: now,
            tags: self.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreateInput {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub tag_ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskUpdateInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub due_date: Option<DateTime<Utc>>,
    pub tag_ids: Option<Vec<i64>>,
}
