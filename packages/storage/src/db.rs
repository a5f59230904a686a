// ABOUTME: Database connection setup for SQLite
// ABOUTME: Configures the pool, PRAGMAs, and runs embedded migrations

use std::path::Path;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::StorageError;

/// Embedded migrations, applied on connect
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open (creating if needed) the database at `database_path` and run migrations
pub async fn connect(database_path: &Path) -> Result<SqlitePool, StorageError> {
    if let Some(parent) = database_path.parent() {
        std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
    }

    let database_url = format!("sqlite:{}?mode=rwc", database_path.display());

    debug!("Connecting to database: {}", database_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .map_err(StorageError::Sqlx)?;

    configure(&pool).await?;

    info!("Database connection established");

    MIGRATOR.run(&pool).await.map_err(StorageError::Migration)?;

    debug!("Database migrations completed");

    Ok(pool)
}

/// Apply the SQLite settings every pool needs, including in-memory test pools
pub async fn configure(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query("PRAGMA journal_mode = WAL")
        .execute(pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(pool)
        .await
        .map_err(StorageError::Sqlx)?;

    Ok(())
}
