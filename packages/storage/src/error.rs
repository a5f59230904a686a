// ABOUTME: Storage error taxonomy shared by all entity storage layers
// ABOUTME: Business-rule refusals are values at the service layer, never variants here

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Duplicate tag name: {0}")]
    DuplicateName(String),
    #[error("Duplicate user email: {0}")]
    DuplicateEmail(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
