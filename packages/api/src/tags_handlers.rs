// ABOUTME: HTTP request handlers for tag operations
// ABOUTME: Maps service outcomes onto status codes for the tags resource

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use tracing::info;

use tasklight_tags::{
    TagCreateInput, TagCreateOutcome, TagDeleteOutcome, TagUpdateInput, TagUpdateOutcome,
};

use crate::response::{bad_request, not_found, storage_error_response, ApiResponse};
use crate::state::DbState;
use crate::validation;

/// List all tags
pub async fn list_tags(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing tags");

    match db.tag_service.list_tags().await {
        Ok(tags) => (StatusCode::OK, ResponseJson(ApiResponse::success(tags))).into_response(),
        Err(e) => storage_error_response(e),
    }
}

/// Get a single tag by ID
pub async fn get_tag(State(db): State<DbState>, Path(tag_id): Path<i64>) -> impl IntoResponse {
    info!("Getting tag: {}", tag_id);

    match db.tag_service.get_tag(tag_id).await {
        Ok(Some(tag)) => (StatusCode::OK, ResponseJson(ApiResponse::success(tag))).into_response(),
        Ok(None) => not_found("Tag not found"),
        Err(e) => storage_error_response(e),
    }
}

/// Request body for creating a tag
#[derive(Deserialize)]
pub struct CreateTagRequest {
    pub name: String,
}

/// Create a new tag
pub async fn create_tag(
    State(db): State<DbState>,
    Json(request): Json<CreateTagRequest>,
) -> impl IntoResponse {
    info!("Creating tag: {}", request.name);

    let name = match validation::validate_tag_name(&request.name) {
        Ok(name) => name,
        Err(message) => return bad_request(message),
    };

    match db.tag_service.create_tag(TagCreateInput { name }).await {
        Ok(TagCreateOutcome::Created(tag)) => {
            (StatusCode::CREATED, ResponseJson(ApiResponse::success(tag))).into_response()
        }
        Ok(TagCreateOutcome::NameTaken) => {
            bad_request(format!("A tag named '{}' already exists", request.name.trim()))
        }
        Err(e) => storage_error_response(e),
    }
}

/// Request body for updating a tag
#[derive(Deserialize)]
pub struct UpdateTagRequest {
    pub name: Option<String>,
}

/// Update a tag
pub async fn update_tag(
    State(db): State<DbState>,
    Path(tag_id): Path<i64>,
    Json(request): Json<UpdateTagRequest>,
) -> impl IntoResponse {
    info!("Updating tag: {}", tag_id);

    let name = match request.name.as_deref().map(validation::validate_tag_name) {
        Some(Ok(name)) => Some(name),
        Some(Err(message)) => return bad_request(message),
        None => None,
    };

    match db
        .tag_service
        .update_tag(tag_id, TagUpdateInput { name })
        .await
    {
        Ok(TagUpdateOutcome::Updated(_)) => StatusCode::NO_CONTENT.into_response(),
        Ok(TagUpdateOutcome::NotFound) => not_found("Tag not found"),
        Err(e) => storage_error_response(e),
    }
}

/// Delete a tag
pub async fn delete_tag(State(db): State<DbState>, Path(tag_id): Path<i64>) -> impl IntoResponse {
    info!("Deleting tag: {}", tag_id);

    match db.tag_service.delete_tag(tag_id).await {
        Ok(TagDeleteOutcome::Deleted) => StatusCode::NO_CONTENT.into_response(),
        Ok(TagDeleteOutcome::NotFound) => not_found("Tag not found"),
        Err(e) => storage_error_response(e),
    }
}
