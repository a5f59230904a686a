// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Handles persistence for tags with name-based lookup

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use tasklight_storage::StorageError;

use crate::types::{Tag, TagCreateInput};

pub struct TagStorage {
    pool: SqlitePool,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all tags, ordered by name
    pub async fn list_tags(&self) -> Result<Vec<Tag>, StorageError> {
        debug!("Fetching all tags");

        let rows = sqlx::query("SELECT * FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_tag).collect()
    }

    /// Get a single tag by ID
    pub async fn get_tag(&self, tag_id: i64) -> Result<Option<Tag>, StorageError> {
        debug!("Fetching tag: {}", tag_id);

        let row = sqlx::query("SELECT * FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_tag).transpose()
    }

    /// Get a tag by name
    pub async fn get_tag_by_name(&self, name: &str) -> Result<Option<Tag>, StorageError> {
        debug!("Fetching tag by name: {}", name);

        let row = sqlx::query("SELECT * FROM tags WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_tag).transpose()
    }

    /// Insert a new tag and return it with its storage-assigned id
    pub async fn create_tag(&self, input: &TagCreateInput) -> Result<Tag, StorageError> {
        let now = Utc::now();

        debug!("Creating tag: {}", input.name);

        let result = sqlx::query("INSERT INTO tags (name, created_at) VALUES (?, ?)")
            .bind(&input.name)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_name_or(e, &input.name))?;

        Ok(Tag {
            id: result.last_insert_rowid(),
            name: input.name.clone(),
            created_at: now,
        })
    }

    /// Persist an updated tag value
    pub async fn update_tag(&self, tag: &Tag) -> Result<Tag, StorageError> {
        debug!("Updating tag: {}", tag.id);

        sqlx::query("UPDATE tags SET name = ? WHERE id = ?")
            .bind(&tag.name)
            .bind(tag.id)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_name_or(e, &tag.name))?;

        Ok(tag.clone())
    }

    /// Delete a tag, returning the number of rows removed
    pub async fn delete_tag(&self, tag_id: i64) -> Result<u64, StorageError> {
        debug!("Deleting tag: {}", tag_id);

        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(tag_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected())
    }
}

/// Map a UNIQUE constraint violation on tags.name to its dedicated error
fn duplicate_name_or(err: sqlx::Error, name: &str) -> StorageError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StorageError::DuplicateName(name.to_string())
        }
        other => StorageError::Sqlx(other),
    }
}

/// Convert a database row to a Tag
fn row_to_tag(row: &sqlx::sqlite::SqliteRow) -> Result<Tag, StorageError> {
    Ok(Tag {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
    })
}
