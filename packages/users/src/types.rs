// ABOUTME: User type definitions
// ABOUTME: Structures for user profiles keyed by unique email

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build the updated value of this user without mutating the stored one
    pub fn merged_with(&self, input: &UserUpdateInput, now: DateTime<Utc>) -> User {
        User {
            id: self.id,
            email: input.email.clone().unwrap_or_else(|| self.email.clone()),
            name: input.name.clone().unwrap_or_else(|| self.name.clone()),
            created_at: self.created_at,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreateInput {
    pub email: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdateInput {
    pub email: Option<String>,
    pub name: Option<String>,
}
