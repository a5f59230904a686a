// ABOUTME: Task storage layer using SQLite
// ABOUTME: Handles persistence for tasks and their tag association rows

use std::collections::HashSet;

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tasklight_tags::Tag;
use tracing::debug;

use tasklight_storage::StorageError;

use crate::types::{Task, TaskCreateInput, TaskStatus};

pub struct TaskStorage {
    pool: SqlitePool,
}

impl TaskStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all tasks with their tags, oldest first
    pub async fn list_tasks(&self) -> Result<Vec<Task>, StorageError> {
        debug!("Fetching all tasks");

        let rows = sqlx::query("SELECT * FROM tasks ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut tasks = Vec::new();
        for row in &rows {
            let mut task = row_to_task(row)?;
            task.tags = self.tags_for_task(task.id).await?;
            tasks.push(task);
        }

        Ok(tasks)
    }

    /// Get a single task by ID, with tags loaded
    pub async fn get_task(&self, task_id: i64) -> Result<Option<Task>, StorageError> {
        debug!("Fetching task: {}", task_id);

        let row = sqlx::query("SELECT * FROM tasks WHERE id = ?")
            .bind(task_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        match row {
            Some(r) => {
                let mut task = row_to_task(&r)?;
                task.tags = self.tags_for_task(task.id).await?;
                Ok(Some(task))
            }
            None => Ok(None),
        }
    }

    /// Insert a new task plus its tag associations and return it hydrated
    pub async fn create_task(&self, input: &TaskCreateInput) -> Result<Task, StorageError> {
        let now = Utc::now();
        let status = input.status.unwrap_or_default();

        debug!("Creating task: {}", input.title);

        let result = sqlx::query(
            r#"
            INSERT INTO tasks (title, description, status, due_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(status)
        .bind(input.due_date)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        let task_id = result.last_insert_rowid();
        self.set_task_tags(task_id, &input.tag_ids).await?;

        Ok(Task {
            id: task_id,
            title: input.title.clone(),
            description: input.description.clone(),
            status,
            due_date: input.due_date,
            created_at: now,
            updated_at: now,
            tags: self.tags_for_task(task_id).await?,
        })
    }

    /// Persist an updated task value (scalar fields only)
    pub async fn update_task(&self, task: &Task) -> Result<Task, StorageError> {
        debug!("Updating task: {}", task.id);

        sqlx::query(
            r#"
            UPDATE tasks
            SET title = ?, description = ?, status = ?, due_date = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.status)
        .bind(task.due_date)
        .bind(task.updated_at)
        .bind(task.id)
        .execute(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        Ok(task.clone())
    }

    /// Delete a task, returning the number of rows removed.
    /// Association rows go with it via ON DELETE CASCADE.
    pub async fn delete_task(&self, task_id: i64) -> Result<u64, StorageError> {
        debug!("Deleting task: {}", task_id);

        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected())
    }

    /// Replace the set of tags associated with a task
    pub async fn set_task_tags(&self, task_id: i64, tag_ids: &[i64]) -> Result<(), StorageError> {
        debug!("Setting tags for task {}: {:?}", task_id, tag_ids);

        sqlx::query("DELETE FROM task_tags WHERE task_id = ?")
            .bind(task_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        for tag_id in tag_ids {
            sqlx::query("INSERT OR IGNORE INTO task_tags (task_id, tag_id) VALUES (?, ?)")
                .bind(task_id)
                .bind(tag_id)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;
        }

        Ok(())
    }

    /// Fetch the tags associated with a task, ordered by name
    pub async fn tags_for_task(&self, task_id: i64) -> Result<Vec<Tag>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT t.*
            FROM tags t
            JOIN task_tags tt ON tt.tag_id = t.id
            WHERE tt.task_id = ?
            ORDER BY t.name
            "#,
        )
        .bind(task_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_tag).collect()
    }

    /// List tasks associated with any of the given tag ids, with tags loaded
    pub async fn list_tasks_by_tags(&self, tag_ids: &[i64]) -> Result<Vec<Task>, StorageError> {
        debug!("Fetching tasks by tags: {:?}", tag_ids);

        if tag_ids.is_empty() {
            return Ok(Vec::new());
        }

        // Build the IN clause with one placeholder per id
        let placeholders = vec!["?"; tag_ids.len()].join(", ");
        let query_str = format!(
            r#"
            SELECT DISTINCT t.*
            FROM tasks t
            JOIN task_tags tt ON tt.task_id = t.id
            WHERE tt.tag_id IN ({})
            ORDER BY t.created_at, t.id
            "#,
            placeholders
        );

        let mut query = sqlx::query(&query_str);
        for tag_id in tag_ids {
            query = query.bind(tag_id);
        }

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        let mut tasks = Vec::new();
        for row in &rows {
            let mut task = row_to_task(row)?;
            task.tags = self.tags_for_task(task.id).await?;
            tasks.push(task);
        }

        Ok(tasks)
    }

    /// Return the first of the given tag ids that does not exist, if any
    pub async fn missing_tag_id(&self, tag_ids: &[i64]) -> Result<Option<i64>, StorageError> {
        if tag_ids.is_empty() {
            return Ok(None);
        }

        let placeholders = vec!["?"; tag_ids.len()].join(", ");
        let query_str = format!("SELECT id FROM tags WHERE id IN ({})", placeholders);

        let mut query = sqlx::query_scalar::<_, i64>(&query_str);
        for tag_id in tag_ids {
            query = query.bind(tag_id);
        }

        let known: HashSet<i64> = query
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?
            .into_iter()
            .collect();

        Ok(tag_ids.iter().copied().find(|id| !known.contains(id)))
    }
}

/// Convert a database row to a Task; tags are loaded separately
fn row_to_task(row: &sqlx::sqlite::SqliteRow) -> Result<Task, StorageError> {
    Ok(Task {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        status: row.try_get::<TaskStatus, _>("status")?,
        due_date: row.try_get("due_date")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        tags: Vec::new(),
    })
}

/// Convert a database row to a Tag
fn row_to_tag(row: &sqlx::sqlite::SqliteRow) -> Result<Tag, StorageError> {
    Ok(Tag {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}
