// ABOUTME: Tasklight server entry point
// ABOUTME: Loads configuration, opens the database, and serves the REST API

use std::net::SocketAddr;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

mod config;

use config::Config;
use tasklight_api::DbState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    println!("🚀 Starting Tasklight server...");
    println!("📡 Server will run on http://localhost:{}", config.port);
    println!("🔗 CORS origin: {}", config.cors_origin);

    let db = DbState::init_with_path(config.database_path.clone()).await?;

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    // Create the router with CORS
    let app = tasklight_api::create_router(db).layer(cors);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    info!("Server listening on {}", addr);
    println!("✅ Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
