// ABOUTME: User storage layer using SQLite
// ABOUTME: Handles persistence for users with email-based lookup

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use tasklight_storage::StorageError;

use crate::types::{User, UserCreateInput};

pub struct UserStorage {
    pool: SqlitePool,
}

impl UserStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users in insertion order
    pub async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        debug!("Fetching all users");

        let rows = sqlx::query("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(row_to_user).collect()
    }

    /// Get a single user by ID
    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>, StorageError> {
        debug!("Fetching user: {}", user_id);

        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Get a user by email
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        debug!("Fetching user by email: {}", email);

        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(row_to_user).transpose()
    }

    /// Insert a new user and return it with its storage-assigned id
    pub async fn create_user(&self, input: &UserCreateInput) -> Result<User, StorageError> {
        let now = Utc::now();

        debug!("Creating user: {}", input.email);

        let result = sqlx::query(
            "INSERT INTO users (email, name, created_at, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.email)
        .bind(&input.name)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| duplicate_email_or(e, &input.email))?;

        Ok(User {
            id: result.last_insert_rowid(),
            email: input.email.clone(),
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Persist an updated user value
    pub async fn update_user(&self, user: &User) -> Result<User, StorageError> {
        debug!("Updating user: {}", user.id);

        sqlx::query("UPDATE users SET email = ?, name = ?, updated_at = ? WHERE id = ?")
            .bind(&user.email)
            .bind(&user.name)
            .bind(user.updated_at)
            .bind(user.id)
            .execute(&self.pool)
            .await
            .map_err(|e| duplicate_email_or(e, &user.email))?;

        Ok(user.clone())
    }

    /// Delete a user, returning the number of rows removed
    pub async fn delete_user(&self, user_id: i64) -> Result<u64, StorageError> {
        debug!("Deleting user: {}", user_id);

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        Ok(result.rows_affected())
    }
}

/// Map a UNIQUE constraint violation on users.email to its dedicated error
fn duplicate_email_or(err: sqlx::Error, email: &str) -> StorageError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            StorageError::DuplicateEmail(email.to_string())
        }
        other => StorageError::Sqlx(other),
    }
}

/// Convert a database row to a User
fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User, StorageError> {
    Ok(User {
        id: row.try_get("id")?,
        email: row.try_get("email")?,
        name: row.try_get("name")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
