// ABOUTME: HTTP request handlers for user operations
// ABOUTME: Maps service outcomes onto status codes for the users resource

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use tracing::info;

use tasklight_users::{
    UserCreateInput, UserCreateOutcome, UserDeleteOutcome, UserUpdateInput, UserUpdateOutcome,
};

use crate::response::{bad_request, not_found, storage_error_response, ApiResponse};
use crate::state::DbState;
use crate::validation;

/// List all users
pub async fn list_users(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing users");

    match db.user_service.list_users().await {
        Ok(users) => (StatusCode::OK, ResponseJson(ApiResponse::success(users))).into_response(),
        Err(e) => storage_error_response(e),
    }
}

/// Get a single user by ID
pub async fn get_user(State(db): State<DbState>, Path(user_id): Path<i64>) -> impl IntoResponse {
    info!("Getting user: {}", user_id);

    match db.user_service.get_user(user_id).await {
        Ok(Some(user)) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(user))).into_response()
        }
        Ok(None) => not_found("User not found"),
        Err(e) => storage_error_response(e),
    }
}

/// Get a single user by email
pub async fn get_user_by_email(
    State(db): State<DbState>,
    Path(email): Path<String>,
) -> impl IntoResponse {
    info!("Getting user by email: {}", email);

    match db.user_service.get_user_by_email(&email).await {
        Ok(Some(user)) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(user))).into_response()
        }
        Ok(None) => not_found("User not found"),
        Err(e) => storage_error_response(e),
    }
}

/// Request body for creating a user
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

/// Create a new user
pub async fn create_user(
    State(db): State<DbState>,
    Json(request): Json<CreateUserRequest>,
) -> impl IntoResponse {
    info!("Creating user: {}", request.email);

    let email = match validation::validate_email(&request.email) {
        Ok(email) => email,
        Err(message) => return bad_request(message),
    };
    let name = match validation::validate_user_name(&request.name) {
        Ok(name) => name,
        Err(message) => return bad_request(message),
    };

    match db
        .user_service
        .create_user(UserCreateInput { email: email.clone(), name })
        .await
    {
        Ok(UserCreateOutcome::Created(user)) => {
            (StatusCode::CREATED, ResponseJson(ApiResponse::success(user))).into_response()
        }
        Ok(UserCreateOutcome::EmailTaken) => {
            bad_request(format!("A user with email '{}' already exists", email))
        }
        Err(e) => storage_error_response(e),
    }
}

/// Request body for updating a user
#[derive(Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Update a user
pub async fn update_user(
    State(db): State<DbState>,
    Path(user_id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> impl IntoResponse {
    info!("Updating user: {}", user_id);

    let email = match request.email.as_deref().map(validation::validate_email) {
        Some(Ok(email)) => Some(email),
        Some(Err(message)) => return bad_request(message),
        None => None,
    };
    let name = match request.name.as_deref().map(validation::validate_user_name) {
        Some(Ok(name)) => Some(name),
        Some(Err(message)) => return bad_request(message),
        None => None,
    };

    match db
        .user_service
        .update_user(user_id, UserUpdateInput { email, name })
        .await
    {
        Ok(UserUpdateOutcome::Updated(_)) => StatusCode::NO_CONTENT.into_response(),
        Ok(UserUpdateOutcome::NotFound) => not_found("User not found"),
        Err(e) => storage_error_response(e),
    }
}

/// Delete a user
pub async fn delete_user(State(db): State<DbState>, Path(user_id): Path<i64>) -> impl IntoResponse {
    info!("Deleting user: {}", user_id);

    match db.user_service.delete_user(user_id).await {
        Ok(UserDeleteOutcome::Deleted) => StatusCode::NO_CONTENT.into_response(),
        Ok(UserDeleteOutcome::NotFound) => not_found("User not found"),
        Err(e) => storage_error_response(e),
    }
}
