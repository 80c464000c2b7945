// ABOUTME: Product type definitions
// ABOUTME: Structures for products, their relations, and API inputs

mod reconcile;
mod storage;

use serde::{Deserialize, Serialize};
use sqlx::Row;

pub use reconcile::{reconcile_tags, TagAssociation, TagDelta};
pub use storage::ProductStorage;

use crate::categories::Category;
use crate::error::StorageResult;
use crate::tags::Tag;

pub const DEFAULT_STOCK: i64 = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub product_name: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<i64>,
}

/// A product together with its category and tags
#[derive(Debug, Clone, Serialize)]
pub struct ProductWithRelations {
    pub id: i64,
    pub product_name: String,
    pub price: f64,
    pub stock: i64,
    pub category_id: Option<i64>,
    pub category: Option<Category>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreateInput {
    pub product_name: String,
    pub price: f64,
    pub stock: Option<i64>,
    pub category_id: Option<i64>,
    pub tag_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductUpdateInput {
    pub product_name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
    pub category_id: Option<i64>,
    /// `None` means the request did not mention tags; reconciliation is
    /// skipped entirely. `Some(vec![])` removes every association.
    pub tag_ids: Option<Vec<i64>>,
}

pub(crate) fn row_to_product(row: &sqlx::sqlite::SqliteRow) -> StorageResult<Product> {
    Ok(Product {
        id: row.try_get("id")?,
        product_name: row.try_get("product_name")?,
        price: row.try_get("price")?,
        stock: row.try_get("stock")?,
        category_id: row.try_get("category_id")?,
    })
}
