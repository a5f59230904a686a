// ABOUTME: Integration tests for database setup
// ABOUTME: Verifies pool creation and that migrations produce the schema

use tempfile::TempDir;

#[tokio::test]
async fn test_connect_creates_database_and_schema() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("tasklight.db");

    let pool = tasklight_storage::connect(&db_path).await.unwrap();

    assert!(db_path.exists());

    // All four tables exist after migration
    let tables: Vec<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'tags', 'tasks', 'task_tags') ORDER BY name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(tables, vec!["tags", "task_tags", "tasks", "users"]);
}

#[tokio::test]
async fn test_connect_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("tasklight.db");

    let pool = tasklight_storage::connect(&db_path).await.unwrap();
    drop(pool);

    // Re-opening an existing database re-runs migrations harmlessly
    let pool = tasklight_storage::connect(&db_path).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tags")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
