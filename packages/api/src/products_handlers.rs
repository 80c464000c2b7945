// ABOUTME: HTTP request handlers for product operations
// ABOUTME: Handles CRUD operations for products including tag reconciliation on update

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::response::{ApiError, ApiResponse};
use storefront_storage::products::{ProductCreateInput, ProductUpdateInput};
use storefront_storage::DbState;

/// List all products with their category and tags
pub async fn list_products(State(db): State<DbState>) -> impl IntoResponse {
    info!("Listing products");

    match db.product_storage.list_products().await {
        Ok(products) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(products))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Get a single product by ID
pub async fn get_product(
    State(db): State<DbState>,
    Path(product_id): Path<i64>,
) -> impl IntoResponse {
    info!("Getting product: {}", product_id);

    match db.product_storage.get_product(product_id).await {
        Ok(product) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(product))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Request body for creating a product
#[derive(Deserialize)]
pub struct CreateProductRequest {
    pub product_name: String,
    pub price: f64,
    pub stock: Option<i64>,
    pub category_id: Option<i64>,
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<i64>>,
}

/// Create a new product
pub async fn create_product(
    State(db): State<DbState>,
    Json(request): Json<CreateProductRequest>,
) -> impl IntoResponse {
    info!("Creating product: {}", request.product_name);

    let input = ProductCreateInput {
        product_name: request.product_name,
        price: request.price,
        stock: request.stock,
        category_id: request.category_id,
        tag_ids: request.tag_ids,
    };

    match db.product_storage.create_product(input).await {
        Ok(product) => {
            (StatusCode::CREATED, ResponseJson(ApiResponse::success(product))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Request body for updating a product
#[derive(Deserialize)]
pub struct UpdateProductRequest {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category_id: Option<i64>,
    /// Omitting this field leaves the product's tags unchanged; sending an
    /// empty list removes them all.
    #[serde(rename = "tagIds")]
    pub tag_ids: Option<Vec<i64>>,
}

/// Update a product, reconciling tag associations when a tag list is given
pub async fn update_product(
    State(db): State<DbState>,
    Path(product_id): Path<i64>,
    Json(request): Json<UpdateProductRequest>,
) -> impl IntoResponse {
    info!("Updating product: {}", product_id);

    let input = ProductUpdateInput {
        product_name: request.product_name,
        price: request.price,
        stock: request.stock,
        category_id: request.category_id,
        tag_ids: request.tag_ids,
    };

    match db.product_storage.update_product(product_id, input).await {
        Ok(product) => {
            (StatusCode::OK, ResponseJson(ApiResponse::success(product))).into_response()
        }
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Delete a product by its ID
pub async fn delete_product(
    State(db): State<DbState>,
    Path(product_id): Path<i64>,
) -> impl IntoResponse {
    info!("Deleting product: {}", product_id);

    match db.product_storage.delete_product(product_id).await {
        Ok(_) => (
            StatusCode::OK,
            ResponseJson(ApiResponse::success("Product deleted successfully")),
        )
            .into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
