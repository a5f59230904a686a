// ABOUTME: Shared application state for API handlers
// ABOUTME: Wires the SQLite pool into per-entity storages and services

use std::path::PathBuf;
use std::sync::Arc;

use sqlx::SqlitePool;

use tasklight_storage::{db, StorageError};
use tasklight_tags::{TagService, TagStorage};
use tasklight_tasks::{TaskService, TaskStorage};
use tasklight_users::{UserService, UserStorage};

/// Default database file, relative to the working directory
pub const DEFAULT_DATABASE_FILE: &str = "tasklight.db";

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub tag_service: Arc<TagService>,
    pub task_service: Arc<TaskService>,
    pub user_service: Arc<UserService>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let tag_service = Arc::new(TagService::new(TagStorage::new(pool.clone())));
        let task_service = Arc::new(TaskService::new(TaskStorage::new(pool.clone())));
        let user_service = Arc::new(UserService::new(UserStorage::new(pool.clone())));

        Self {
            pool,
            tag_service,
            task_service,
            user_service,
        }
    }

    /// Initialize database state with default configuration
    pub async fn init() -> Result<Self, StorageError> {
        Self::init_with_path(None).await
    }

    /// Initialize database state with an optional custom database path
    pub async fn init_with_path(
        database_path: Option<PathBuf>,
    ) -> Result<Self, StorageError> {
        let database_path =
            database_path.unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_FILE));

        let pool = db::connect(&database_path).await?;
        Ok(Self::new(pool))
    }
}
