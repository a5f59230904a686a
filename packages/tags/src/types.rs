// ABOUTME: Tag type definitions
// ABOUTME: Structures for tags used to organize tasks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Tag {
    /// Build the updated value of this tag without mutating the stored one
    pub fn merged_with(&self, input: &TagUpdateInput) -> Tag {
        Tag {
            id: self.id,
            name: input.name.clone().unwrap_or_else(|| self.name.clone()),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreateInput {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagUpdateInput {
    pub name: Option<String>,
}
