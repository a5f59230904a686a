// ABOUTME: Integration tests for the tag storage and service layers
// ABOUTME: Tests CRUD operations, name uniqueness, and not-found outcomes

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tasklight_storage::StorageError;
use tasklight_tags::{
    TagCreateInput, TagCreateOutcome, TagDeleteOutcome, TagService, TagStorage, TagUpdateInput,
    TagUpdateOutcome,
};

/// Helper to create an in-memory database for testing.
/// A single connection keeps every query on the same in-memory database.
async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    tasklight_storage::db::configure(&pool).await.unwrap();
    tasklight_storage::MIGRATOR.run(&pool).await.unwrap();
    pool
}

fn create_input(name: &str) -> TagCreateInput {
    TagCreateInput {
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_create_tag() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    let outcome = service.create_tag(create_input("Feature")).await.unwrap();

    let TagCreateOutcome::Created(tag) = outcome else {
        panic!("expected tag to be created");
    };
    assert_eq!(tag.name, "Feature");
    assert!(tag.id > 0);
}

#[tokio::test]
async fn test_create_tag_with_taken_name_is_refused() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    service.create_tag(create_input("Urgent")).await.unwrap();
    let outcome = service.create_tag(create_input("Urgent")).await.unwrap();

    assert!(matches!(outcome, TagCreateOutcome::NameTaken));

    // The refusal must not have written anything
    let tags = service.list_tags().await.unwrap();
    assert_eq!(tags.len(), 1);
}

#[tokio::test]
async fn test_get_tag() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    let TagCreateOutcome::Created(created) =
        service.create_tag(create_input("Bug")).await.unwrap()
    else {
        panic!("expected tag to be created");
    };

    let retrieved = service.get_tag(created.id).await.unwrap().unwrap();
    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, "Bug");
}

#[tokio::test]
async fn test_get_missing_tag_is_none() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    assert!(service.get_tag(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_tag_by_name() {
    let pool = create_test_db().await;
    let storage = TagStorage::new(pool);

    storage.create_tag(&create_input("Refactor")).await.unwrap();

    let found = storage.get_tag_by_name("Refactor").await.unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Refactor");

    let not_found = storage.get_tag_by_name("NonExistent").await.unwrap();
    assert!(not_found.is_none());
}

#[tokio::test]
async fn test_list_tags() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    for name in &["Feature", "Bug", "Docs"] {
        service.create_tag(create_input(name)).await.unwrap();
    }

    let tags = service.list_tags().await.unwrap();
    assert_eq!(tags.len(), 3);

    // Check alphabetical ordering
    assert_eq!(tags[0].name, "Bug");
    assert_eq!(tags[1].name, "Docs");
    assert_eq!(tags[2].name, "Feature");
}

#[tokio::test]
async fn test_list_tags_empty() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    assert!(service.list_tags().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_tag() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    let TagCreateOutcome::Created(created) =
        service.create_tag(create_input("Old")).await.unwrap()
    else {
        panic!("expected tag to be created");
    };

    let update = TagUpdateInput {
        name: Some("New".to_string()),
    };
    let outcome = service.update_tag(created.id, update).await.unwrap();

    let TagUpdateOutcome::Updated(updated) = outcome else {
        panic!("expected tag to be updated");
    };
    assert_eq!(updated.name, "New");

    // A subsequent read reflects the rename
    let reread = service.get_tag(created.id).await.unwrap().unwrap();
    assert_eq!(reread.name, "New");
}

#[tokio::test]
async fn test_update_missing_tag() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    let update = TagUpdateInput {
        name: Some("Anything".to_string()),
    };
    let outcome = service.update_tag(99, update).await.unwrap();

    assert!(matches!(outcome, TagUpdateOutcome::NotFound));
}

#[tokio::test]
async fn test_update_with_no_fields_keeps_tag() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    let TagCreateOutcome::Created(created) =
        service.create_tag(create_input("Keep")).await.unwrap()
    else {
        panic!("expected tag to be created");
    };

    let outcome = service
        .update_tag(created.id, TagUpdateInput { name: None })
        .await
        .unwrap();

    let TagUpdateOutcome::Updated(updated) = outcome else {
        panic!("expected tag to be updated");
    };
    assert_eq!(updated.name, "Keep");
}

#[tokio::test]
async fn test_rename_to_taken_name_is_a_storage_error() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    service.create_tag(create_input("First")).await.unwrap();
    let TagCreateOutcome::Created(second) =
        service.create_tag(create_input("Second")).await.unwrap()
    else {
        panic!("expected tag to be created");
    };

    // The service performs no duplicate re-check on update; the UNIQUE
    // index rejects the collision instead.
    let update = TagUpdateInput {
        name: Some("First".to_string()),
    };
    let err = service.update_tag(second.id, update).await.unwrap_err();
    assert!(matches!(err, StorageError::DuplicateName(_)));
}

#[tokio::test]
async fn test_delete_tag() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    let TagCreateOutcome::Created(created) =
        service.create_tag(create_input("Gone")).await.unwrap()
    else {
        panic!("expected tag to be created");
    };

    let outcome = service.delete_tag(created.id).await.unwrap();
    assert!(matches!(outcome, TagDeleteOutcome::Deleted));

    assert!(service.get_tag(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_tag() {
    let pool = create_test_db().await;
    let service = TagService::new(TagStorage::new(pool));

    let outcome = service.delete_tag(99).await.unwrap();
    assert!(matches!(outcome, TagDeleteOutcome::NotFound));
}
