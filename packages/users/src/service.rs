// ABOUTME: Business-rule layer for users
// ABOUTME: Enforces email uniqueness and existence checks over the storage layer

use chrono::Utc;
use tracing::debug;

use tasklight_storage::StorageError;

use crate::storage::UserStorage;
use crate::types::{User, UserCreateInput, UserUpdateInput};

/// Result of a create attempt; a taken email is an expected refusal, not an error
#[derive(Debug)]
pub enum UserCreateOutcome {
    Created(User),
    EmailTaken,
}

#[derive(Debug)]
pub enum UserUpdateOutcome {
    Updated(User),
    NotFound,
}

#[derive(Debug)]
pub enum UserDeleteOutcome {
    Deleted,
    NotFound,
}

/// Stateless orchestrator for the user lifecycle
pub struct UserService {
    storage: UserStorage,
}

impl UserService {
    pub fn new(storage: UserStorage) -> Self {
        Self { storage }
    }

    pub async fn get_user(&self, user_id: i64) -> Result<Option<User>, StorageError> {
        self.storage.get_user(user_id).await
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StorageError> {
        self.storage.get_user_by_email(email).await
    }

    pub async fn list_users(&self) -> Result<Vec<User>, StorageError> {
        self.storage.list_users().await
    }

    /// Create a user unless the email is already registered.
    ///
    /// The lookup and the insert are not atomic; the UNIQUE index on
    /// users.email catches the losing side of a concurrent create, which is
    /// folded into the same `EmailTaken` outcome.
    pub async fn create_user(
        &self,
        input: UserCreateInput,
    ) -> Result<UserCreateOutcome, StorageError> {
        if self
            .storage
            .get_user_by_email(&input.email)
            .await?
            .is_some()
        {
            debug!("Refusing to create user, email taken: {}", input.email);
            return Ok(UserCreateOutcome::EmailTaken);
        }

        match self.storage.create_user(&input).await {
            Ok(user) => Ok(UserCreateOutcome::Created(user)),
            Err(StorageError::DuplicateEmail(_)) => Ok(UserCreateOutcome::EmailTaken),
            Err(e) => Err(e),
        }
    }

    /// Apply an update to an existing user. Email changes are not re-checked
    /// against other users here; a colliding change surfaces as
    /// `DuplicateEmail` from the storage layer.
    pub async fn update_user(
        &self,
        user_id: i64,
        input: UserUpdateInput,
    ) -> Result<UserUpdateOutcome, StorageError> {
        let Some(existing) = self.storage.get_user(user_id).await? else {
            return Ok(UserUpdateOutcome::NotFound);
        };

        let updated = self
            .storage
            .update_user(&existing.merged_with(&input, Utc::now()))
            .await?;
        Ok(UserUpdateOutcome::Updated(updated))
    }

    pub async fn delete_user(&self, user_id: i64) -> Result<UserDeleteOutcome, StorageError> {
        if self.storage.get_user(user_id).await?.is_none() {
            return Ok(UserDeleteOutcome::NotFound);
        }

        self.storage.delete_user(user_id).await?;
        Ok(UserDeleteOutcome::Deleted)
    }
}
