// ABOUTME: HTTP API layer for Tasklight providing REST endpoints and routing
// ABOUTME: Integration layer that depends on all domain packages

use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub mod response;
pub mod state;
pub mod tags_handlers;
pub mod tasks_handlers;
pub mod users_handlers;
pub mod validation;

pub use state::DbState;

/// Creates the tags API router
pub fn create_tags_router() -> Router<DbState> {
    Router::new()
        .route("/", get(tags_handlers::list_tags))
        .route("/", post(tags_handlers::create_tag))
        .route("/{tag_id}", get(tags_handlers::get_tag))
        .route("/{tag_id}", put(tags_handlers::update_tag))
        .route("/{tag_id}", delete(tags_handlers::delete_tag))
}

/// Creates the tasks API router
pub fn create_tasks_router() -> Router<DbState> {
    Router::new()
        .route("/", get(tasks_handlers::list_tasks))
        .route("/", post(tasks_handlers::create_task))
        .route("/by-tags", get(tasks_handlers::list_tasks_by_tags))
        .route("/{task_id}", get(tasks_handlers::get_task))
        .route("/{task_id}", put(tasks_handlers::update_task))
        .route("/{task_id}", delete(tasks_handlers::delete_task))
}

/// Creates the users API router
pub fn create_users_router() -> Router<DbState> {
    Router::new()
        .route("/", get(users_handlers::list_users))
        .route("/", post(users_handlers::create_user))
        .route("/email/{email}", get(users_handlers::get_user_by_email))
        .route("/{user_id}", get(users_handlers::get_user))
        .route("/{user_id}", put(users_handlers::update_user))
        .route("/{user_id}", delete(users_handlers::delete_user))
}

/// Assembles the full application router under /api
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .nest("/api/tags", create_tags_router())
        .nest("/api/tasks", create_tasks_router())
        .nest("/api/users", create_users_router())
        .with_state(db)
}
