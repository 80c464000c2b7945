// ABOUTME: HTTP API layer providing REST endpoints and routing
// ABOUTME: Thin handlers over the storage package's entity layers

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use storefront_storage::DbState;

pub mod categories_handlers;
pub mod products_handlers;
pub mod response;
pub mod tags_handlers;

/// Creates the categories API router
pub fn create_categories_router() -> Router<DbState> {
    Router::new()
        .route("/", get(categories_handlers::list_categories))
        .route("/", post(categories_handlers::create_category))
        .route("/{id}", get(categories_handlers::get_category))
        .route("/{id}", put(categories_handlers::update_category))
        .route("/{id}", delete(categories_handlers::delete_category))
}

/// Creates the products API router
pub fn create_products_router() -> Router<DbState> {
    Router::new()
        .route("/", get(products_handlers::list_products))
        .route("/", post(products_handlers::create_product))
        .route("/{id}", get(products_handlers::get_product))
        .route("/{id}", put(products_handlers::update_product))
        .route("/{id}", delete(products_handlers::delete_product))
}

/// Creates the tags API router
pub fn create_tags_router() -> Router<DbState> {
    Router::new()
        .route("/", get(tags_handlers::list_tags))
        .route("/", post(tags_handlers::create_tag))
        .route("/{id}", get(tags_handlers::get_tag))
        .route("/{id}", put(tags_handlers::update_tag))
        .route("/{id}", delete(tags_handlers::delete_tag))
}

/// Composes the full `/api` surface over shared database state
pub fn create_api_router(db: DbState) -> Router {
    Router::new()
        .nest("/api/categories", create_categories_router())
        .nest("/api/products", create_products_router())
        .nest("/api/tags", create_tags_router())
        .with_state(db)
}
