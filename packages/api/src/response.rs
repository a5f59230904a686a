// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;

use tasklight_storage::StorageError;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// 400 response with a message
pub fn bad_request(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        ResponseJson(ApiResponse::<()>::error(message)),
    )
        .into_response()
}

/// 404 response with a message
pub fn not_found(message: &str) -> Response {
    (
        StatusCode::NOT_FOUND,
        ResponseJson(ApiResponse::<()>::error(message.to_string())),
    )
        .into_response()
}

/// Convert storage errors to HTTP responses.
///
/// Natural-key collisions surface as 400 (they reach this path only when a
/// rename/re-email collides, or a create loses a race that the service has
/// already folded into its refusal outcome). Everything else is a server
/// fault; internals stay out of the body.
pub fn storage_error_response(err: StorageError) -> Response {
    let (status, message) = match &err {
        StorageError::DuplicateName(name) => (
            StatusCode::BAD_REQUEST,
            format!("A tag named '{}' already exists", name),
        ),
        StorageError::DuplicateEmail(email) => (
            StatusCode::BAD_REQUEST,
            format!("A user with email '{}' already exists", email),
        ),
        StorageError::Database(_) | StorageError::Sqlx(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database error".to_string(),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    };

    (status, ResponseJson(ApiResponse::<()>::error(message))).into_response()
}
