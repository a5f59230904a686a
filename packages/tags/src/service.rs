// ABOUTME: Business-rule layer for tags
// ABOUTME: Enforces name uniqueness and existence checks over the storage layer

use tracing::debug;

use tasklight_storage::StorageError;

use crate::storage::TagStorage;
use crate::types::{Tag, TagCreateInput, TagUpdateInput};

/// Result of a create attempt; a taken name is an expected refusal, not an error
#[derive(Debug)]
pub enum TagCreateOutcome {
    Created(Tag),
    NameTaken,
}

#[derive(Debug)]
pub enum TagUpdateOutcome {
    Updated(Tag),
    NotFound,
}

#[derive(Debug)]
pub enum TagDeleteOutcome {
    Deleted,
    NotFound,
}

/// Stateless orchestrator for the tag lifecycle
pub struct TagService {
    storage: TagStorage,
}

impl TagService {
    pub fn new(storage: TagStorage) -> Self {
        Self { storage }
    }

    pub async fn get_tag(&self, tag_id: i64) -> Result<Option<Tag>, StorageError> {
        self.storage.get_tag(tag_id).await
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, StorageError> {
        self.storage.list_tags().await
    }

    /// Create a tag unless its name is already taken.
    ///
    /// The lookup and the insert are not atomic; the UNIQUE index on
    /// tags.name catches the losing side of a concurrent create, which is
    /// folded into the same `NameTaken` outcome.
    pub async fn create_tag(
        &self,
        input: TagCreateInput,
    ) -> Result<TagCreateOutcome, StorageError> {
        if self.storage.get_tag_by_name(&input.name).await?.is_some() {
            debug!("Refusing to create tag, name taken: {}", input.name);
            return Ok(TagCreateOutcome::NameTaken);
        }

        match self.storage.create_tag(&input).await {
            Ok(tag) => Ok(TagCreateOutcome::Created(tag)),
            Err(StorageError::DuplicateName(_)) => Ok(TagCreateOutcome::NameTaken),
            Err(e) => Err(e),
        }
    }

    /// Apply an update to an existing tag. Renames are not re-checked against
    /// other tags here; a colliding rename surfaces as `DuplicateName` from
    /// the storage layer.
    pub async fn update_tag(
        &self,
        tag_id: i64,
        input: TagUpdateInput,
    ) -> Result<TagUpdateOutcome, StorageError> {
        let Some(existing) = self.storage.get_tag(tag_id).await? else {
            return Ok(TagUpdateOutcome::NotFound);
        };

        let updated = self.storage.update_tag(&existing.merged_with(&input)).await?;
        Ok(TagUpdateOutcome::Updated(updated))
    }

    pub async fn delete_tag(&self, tag_id: i64) -> Result<TagDeleteOutcome, StorageError> {
        if self.storage.get_tag(tag_id).await?.is_none() {
            return Ok(TagDeleteOutcome::NotFound);
        }

        self.storage.delete_tag(tag_id).await?;
        Ok(TagDeleteOutcome::Deleted)
    }
}
