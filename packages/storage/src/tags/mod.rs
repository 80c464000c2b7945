// ABOUTME: Tag type definitions
// ABOUTME: Structures for product tags and their API inputs

mod storage;

use serde::{Deserialize, Serialize};

pub use storage::TagStorage;

use crate::products::Product;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub tag_name: String,
}

/// A tag together with the products carrying it
#[derive(Debug, Clone, Serialize)]
pub struct TagWithProducts {
    pub id: i64,
    pub tag_name: String,
    pub products: Vec<Product>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TagCreateInput {
    pub tag_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagUpdateInput {
    pub tag_name: Option<String>,
}
