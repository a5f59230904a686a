// ABOUTME: Tag management for organizing tasks
// ABOUTME: Provides types, storage layer, and business-rule service for tags

pub mod service;
pub mod storage;
pub mod types;

// Re-export main types
pub use service::{TagCreateOutcome, TagDeleteOutcome, TagService, TagUpdateOutcome};
pub use storage::TagStorage;
pub use types::{Tag, TagCreateInput, TagUpdateInput};
