// ABOUTME: Shared storage layer for Tasklight
// ABOUTME: Provides the SQLite pool setup, migrations, and the storage error taxonomy

pub mod db;
pub mod error;

pub use db::{connect, MIGRATOR};
pub use error::{StorageError, StorageResult};
