// ABOUTME: HTTP request handlers for task operations
// ABOUTME: Maps service outcomes onto status codes for the tasks resource

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use tasklight_tasks::{
    TaskCreateInput, TaskCreateOutcome, TaskDeleteOutcome, TaskStatus, TaskUpdateInput,
    TaskUpdateOutcome,
};

use crate::response::{bad_request, not_found, storage_error_response, ApiResponse};
use crate::state::DbState;
use crate::validation;

/// Helper to parse an ISO 8601 date string
fn parse_due_date(date_str: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(date_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// List all tasks
pub async fn list_tasks(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing tasks");

    match db.task_service.list_tasks().await {
        Ok(tasks) => (StatusCode::OK, ResponseJson(ApiResponse::success(tasks))).into_response(),
        Err(e) => storage_error_response(e),
    }
}

/// Query parameters for the by-tags listing
#[derive(Deserialize)]
pub struct TasksByTagsQuery {
    #[serde(rename = "tagIds", default)]
    pub tag_ids: String,
}

/// List tasks carrying any of the given tags (comma-separated ids)
pub async fn list_tasks_by_tags(
    State(db): State<DbState>,
    Query(params): Query<TasksByTagsQuery>,
) -> impl IntoResponse {
    info!("Listing tasks by tags: {}", params.tag_ids);

    let tag_ids: Result<Vec<i64>, _> = params
        .tag_ids
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect();

    let tag_ids = match tag_ids {
        Ok(ids) => ids,
        Err(_) => {
            return bad_request(format!("Invalid tagIds parameter: '{}'", params.tag_ids))
        }
    };

    match db.task_service.list_tasks_by_tags(&tag_ids).await {
        Ok(tasks) => (StatusCode::OK, ResponseJson(ApiResponse::success(tasks))).into_response(),
        Err(e) => storage_error_response(e),
    }
}

/// Get a single task by ID
pub async fn get_task(State(db): State<DbState>, Path(task_id): Path<i64>) -> impl IntoResponse {
    info!("Getting task: {}", task_id);

    match db.task_service.get_task(task_id).await {
        Ok(Some(task)) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(task))).into_response()
        }
        Ok(None) => not_found("Task not found"),
        Err(e) => storage_error_response(e),
    }
}

/// Request body for creating a task
#[derive(Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<i64>>,
}

/// Create a new task
pub async fn create_task(
    State(db): State<DbState>,
    Json(request): Json<CreateTaskRequest>,
) -> impl IntoResponse {
    info!("Creating task: {}", request.title);

    let title = match validation::validate_task_title(&request.title) {
        Ok(title) => title,
        Err(message) => return bad_request(message),
    };

    let due_date = match request.due_date.as_deref() {
        Some(raw) => match parse_due_date(raw) {
            Some(dt) => Some(dt),
            None => return bad_request(format!("Invalid dueDate: '{}'", raw)),
        },
        None => None,
    };

    let input = TaskCreateInput {
        title,
        description: request.description,
        status: request.status,
        due_date,
        tag_ids: request.tag_ids.unwrap_or_default(),
    };

    match db.task_service.create_task(input).await {
        Ok(TaskCreateOutcome::Created(task)) => {
            (StatusCode::CREATED, ResponseJson(ApiResponse::success(task))).into_response()
        }
        Ok(TaskCreateOutcome::UnknownTag(tag_id)) => {
            bad_request(format!("Unknown tag id: {}", tag_id))
        }
        Err(e) => storage_error_response(e),
    }
}

/// Request body for updating a task
#[derive(Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<i64>>,
}

/// Update an existing task
pub async fn update_task(
    State(db): State<DbState>,
    Path(task_id): Path<i64>,
    Json(request): Json<UpdateTaskRequest>,
) -> impl IntoResponse {
    info!("Updating task: {}", task_id);

    let title = match request.title.as_deref().map(validation::validate_task_title) {
        Some(Ok(title)) => Some(title),
        Some(Err(message)) => return bad_request(message),
        None => None,
    };

    let due_date = match request.due_date.as_deref() {
        Some(raw) => match parse_due_date(raw) {
            Some(dt) => Some(dt),
            None => return bad_request(format!("Invalid dueDate: '{}'", raw)),
        },
        None => None,
    };

    let input = TaskUpdateInput {
        title,
        description: request.description,
        status: request.status,
        due_date,
        tag_ids: request.tag_ids,
    };

    match db.task_service.update_task(task_id, input).await {
        Ok(TaskUpdateOutcome::Updated(_)) => StatusCode::NO_CONTENT.into_response(),
        Ok(TaskUpdateOutcome::NotFound) => not_found("Task not found"),
        Ok(TaskUpdateOutcome::UnknownTag(tag_id)) => {
            bad_request(format!("Unknown tag id: {}", tag_id))
        }
        Err(e) => storage_error_response(e),
    }
}

/// Delete a task
pub async fn delete_task(State(db): State<DbState>, Path(task_id): Path<i64>) -> impl IntoResponse {
    info!("Deleting task: {}", task_id);

    match db.task_service.delete_task(task_id).await {
        Ok(TaskDeleteOutcome::Deleted) => StatusCode::NO_CONTENT.into_response(),
        Ok(TaskDeleteOutcome::NotFound) => not_found("Task not found"),
        Err(e) => storage_error_response(e),
    }
}
