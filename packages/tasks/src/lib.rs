// ABOUTME: Task management for Tasklight
// ABOUTME: Provides types, storage layer, and business-rule service for tasks

pub mod service;
pub mod storage;
pub mod types;

// Re-export main types
pub use service::{TaskCreateOutcome, TaskDeleteOutcome, TaskService, TaskUpdateOutcome};
pub use storage::TaskStorage;
pub use types::{Task, TaskCreateInput, TaskStatus, TaskUpdateInput};
