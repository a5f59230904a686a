// ABOUTME: User management for Tasklight
// ABOUTME: Provides types, storage layer, and business-rule service for users

pub mod service;
pub mod storage;
pub mod types;

// Re-export main types
pub use service::{UserCreateOutcome, UserDeleteOutcome, UserService, UserUpdateOutcome};
pub use storage::UserStorage;
pub use types::{User, UserCreateInput, UserUpdateInput};
