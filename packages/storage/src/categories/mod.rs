// ABOUTME: Category type definitions
// ABOUTME: Structures for product categories and their API inputs

mod storage;

use serde::{Deserialize, Serialize};

pub use storage::CategoryStorage;

use crate::products::Product;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub category_name: String,
}

/// A category together with the products assigned to it
#[derive(Debug, Clone, Serialize)]
pub struct CategoryWithProducts {
    pub id: i64,
    pub category_name: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCreateInput {
    pub category_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoryUpdateInput {
    pub category_name: Option<String>,
}
