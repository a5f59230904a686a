// ABOUTME: Common test utilities for API integration tests
// ABOUTME: Provides test server setup, database helpers, and HTTP client utilities

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use tasklight_api::{create_router, DbState};

/// Test context containing server URL and database pool
pub struct TestContext {
    pub base_url: String,
    pub pool: SqlitePool,
}

/// Create a test server with an isolated in-memory database
pub async fn setup_test_server() -> TestContext {
    // A single connection keeps every query on the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create database pool");

    tasklight_storage::db::configure(&pool)
        .await
        .expect("Failed to configure database");
    tasklight_storage::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let db_state = DbState::new(pool.clone());
    let app = create_router(db_state);

    // Bind to a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server time to start
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

    TestContext { base_url, pool }
}

/// Response envelope mirroring the API's wire format
#[derive(Debug, serde::Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

/// Helper to make GET requests
pub async fn get(base_url: &str, path: &str) -> reqwest::Response {
    reqwest::Client::new()
        .get(format!("{}{}", base_url, path))
        .send()
        .await
        .expect("Failed to make GET request")
}

/// Helper to make POST requests with JSON body
pub async fn post_json<T: serde::Serialize>(
    base_url: &str,
    path: &str,
    body: &T,
) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}{}", base_url, path))
        .json(body)
        .send()
        .await
        .expect("Failed to make POST request")
}

/// Helper to make PUT requests with JSON body
pub async fn put_json<T: serde::Serialize>(
    base_url: &str,
    path: &str,
    body: &T,
) -> reqwest::Response {
    reqwest::Client::new()
        .put(format!("{}{}", base_url, path))
        .json(body)
        .send()
        .await
        .expect("Failed to make PUT request")
}

/// Helper to make DELETE requests
pub async fn delete(base_url: &str, path: &str) -> reqwest::Response {
    reqwest::Client::new()
        .delete(format!("{}{}", base_url, path))
        .send()
        .await
        .expect("Failed to make DELETE request")
}
