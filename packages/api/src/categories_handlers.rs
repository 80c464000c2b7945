// ABOUTME: HTTP request handlers for category operations
// ABOUTME: Handles CRUD operations for categories with database integration

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::response::{ApiError, ApiResponse};
use storefront_storage::categories::{CategoryCreateInput, CategoryUpdateInput};
use storefront_storage::DbState;

/// List all categories with their products
pub async fn list_categories(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing categories");

    match db.category_storage.list_categories().await {
        Ok(categories) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(categories))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get a single category by ID
pub async fn get_category(
    State(db): State<DbState>,
    Path(category_id): Path<i64>,
) -> impl IntoResponse {
    info!("Getting category: {}", category_id);

    match db.category_storage.get_category(category_id).await {
        Ok(category) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(category))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Request body for creating a category
#[derive(Deserialize)]
pub struct CreateCategoryRequest {
    pub category_name: String,
}

/// Create a new category
pub async fn create_category(
    State(db): State<DbState>,
    Json(request): Json<CreateCategoryRequest>,
) -> impl IntoResponse {
    info!("Creating category: {}", request.category_name);

    let input = CategoryCreateInput {
        category_name: request.category_name,
    };

    match db.category_storage.create_category(input).await {
        Ok(category) => {
            (StatusCode::CREATED, ResponseJson(ApiResponse::success(category))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Request body for updating a category
#[derive(Deserialize)]
pub struct UpdateCategoryRequest {
    pub category_name: Option<String>,
}

/// Update a category's name by its ID
pub async fn update_category(
    State(db): State<DbState>,
    Path(category_id): Path<i64>,
    Json(request): Json<UpdateCategoryRequest>,
) -> impl IntoResponse {
    info!("Updating category: {}", category_id);

    let input = CategoryUpdateInput {
        category_name: request.category_name,
    };

    match db.category_storage.update_category(category_id, input).await {
        Ok(category) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(category))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Delete a category by its ID
pub async fn delete_category(
    State(db): State<DbState>,
    Path(category_id): Path<i64>,
) -> impl IntoResponse {
    info!("Deleting category: {}", category_id);

    match db.category_storage.delete_category(category_id).await {
        Ok(_) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success("Category deleted successfully")),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
