// ABOUTME: HTTP request handlers for tag operations
// ABOUTME: Handles CRUD operations for tags with database integration

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::response::{ApiError, ApiResponse};
use storefront_storage::tags::{TagCreateInput, TagUpdateInput};
use storefront_storage::DbState;

/// List all tags with the products carrying them
pub async fn list_tags(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing tags");

    match db.tag_storage.list_tags().await {
        Ok(tags) => (StatusCode::OK, ResponseJson(ApiResponse::success(tags))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get a single tag by ID
pub async fn get_tag(State(db): State<DbState>, Path(tag_id): Path<i64>) -> impl IntoResponse {
    info!("Getting tag: {}", tag_id);

    match db.tag_storage.get_tag(tag_id).await {
        Ok(tag) => (StatusCode::OK, ResponseJson(ApiResponse::success(tag))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Request body for creating a tag
#[derive(Deserialize)]
pub struct CreateTagRequest {
    pub tag_name: String,
}

/// Create a new tag
pub async fn create_tag(
    State(db): State<DbState>,
    Json(request): Json<CreateTagRequest>,
) -> impl IntoResponse {
    info!("Creating tag: {}", request.tag_name);

    let input = TagCreateInput {
        tag_name: request.tag_name,
    };

    match db.tag_storage.create_tag(input).await {
        Ok(tag) => (StatusCode::CREATED, ResponseJson(ApiResponse::success(tag))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Request body for updating a tag
#[derive(Deserialize)]
pub struct UpdateTagRequest {
    pub tag_name: Option<String>,
}

/// Update a tag's name by its ID
pub async fn update_tag(
    State(db): State<DbState>,
    Path(tag_id): Path<i64>,
    Json(request): Json<UpdateTagRequest>,
) -> impl IntoResponse {
    info!("Updating tag: {}", tag_id);

    let input = TagUpdateInput {
        tag_name: request.tag_name,
    };

    match db.tag_storage.update_tag(tag_id, input).await {
        Ok(tag) => (StatusCode::OK, ResponseJson(ApiResponse::success(tag))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Delete a tag by its ID
pub async fn delete_tag(State(db): State<DbState>, Path(tag_id): Path<i64>) -> impl IntoResponse {
    info!("Deleting tag: {}", tag_id);

    match db.tag_storage.delete_tag(tag_id).await {
        Ok(_) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success("Tag deleted successfully")),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
