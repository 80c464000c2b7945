// ABOUTME: Product storage layer using SQLite
// ABOUTME: Handles CRUD operations for products and their tag associations

use sqlx::{Row, SqlitePool};
use tracing::debug;

use super::reconcile::{reconcile_tags, TagAssociation, TagDelta};
use super::{
    row_to_product, Product, ProductCreateInput, ProductUpdateInput, ProductWithRelations,
    DEFAULT_STOCK,
};
use crate::categories::Category;
use crate::error::{StorageError, StorageResult};
use crate::tags::Tag;

pub struct ProductStorage {
    pool: SqlitePool,
}

impl ProductStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all products, each with its category and tags
    pub async fn list_products(&self) -> StorageResult<Vec<ProductWithRelations>> {
        debug!("Fetching products");

        let rows = sqlx::query(
            "SELECT id, product_name, price, stock, category_id FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut products = Vec::with_capacity(rows.len());
        for row in &rows {
            let product = row_to_product(row)?;
            products.push(self.with_relations(product).await?);
        }

        Ok(products)
    }

    /// Get a single product by ID, with its category and tags
    pub async fn get_product(&self, product_id: i64) -> StorageResult<ProductWithRelations> {
        debug!("Fetching product: {}", product_id);

        let product = self.product_row(product_id).await?;
        self.with_relations(product).await
    }

    /// Create a new product, optionally associating it with tags
    pub async fn create_product(
        &self,
        input: ProductCreateInput,
    ) -> StorageResult<ProductWithRelations> {
        debug!("Creating product (name: {})", input.product_name);

        let stock = input.stock.unwrap_or(DEFAULT_STOCK);

        let result = sqlx::query(
            "INSERT INTO products (product_name, price, stock, category_id) VALUES (?, ?, ?, ?)",
        )
        .bind(&input.product_name)
        .bind(input.price)
        .bind(stock)
        .bind(input.category_id)
        .execute(&self.pool)
        .await?;

        let product_id = result.last_insert_rowid();

        if let Some(tag_ids) = input.tag_ids {
            // A fresh product has no associations; the delta is pure creates.
            let delta = reconcile_tags(&tag_ids, &[]);
            self.apply_tag_delta(product_id, &delta).await?;
        }

        self.get_product(product_id).await
    }

    /// Update a product's fields and, when a tag list is supplied, reconcile
    /// its tag associations against it
    pub async fn update_product(
        &self,
        product_id: i64,
        input: ProductUpdateInput,
    ) -> StorageResult<ProductWithRelations> {
        debug!("Updating product: {}", product_id);

        // Existence check up front so a tags-only update still 404s cleanly.
        self.product_row(product_id).await?;

        // Build update query dynamically based on provided fields
        let mut query_parts = Vec::new();

        if input.product_name.is_some() {
            query_parts.push("product_name = ?");
        }
        if input.price.is_some() {
            query_parts.push("price = ?");
        }
        if input.stock.is_some() {
            query_parts.push("stock = ?");
        }
        if input.category_id.is_some() {
            query_parts.push("category_id = ?");
        }

        if !query_parts.is_empty() {
            let query_str = format!(
                "UPDATE products SET {} WHERE id = ?",
                query_parts.join(", ")
            );
            let mut query = sqlx::query(&query_str);

            // Bind parameters in the same order
            if let Some(product_name) = input.product_name {
                query = query.bind(product_name);
            }
            if let Some(price) = input.price {
                query = query.bind(price);
            }
            if let Some(stock) = input.stock {
                query = query.bind(stock);
            }
            if let Some(category_id) = input.category_id {
                query = query.bind(category_id);
            }

            query.bind(product_id).execute(&self.pool).await?;
        }

        // An absent tag list means "no change requested"; an empty one
        // removes every association.
        if let Some(tag_ids) = input.tag_ids {
            let current = self.tag_associations(product_id).await?;
            let delta = reconcile_tags(&tag_ids, &current);
            self.apply_tag_delta(product_id, &delta).await?;
        }

        self.get_product(product_id).await
    }

    /// Delete a product; its tag associations cascade away with it
    pub async fn delete_product(&self, product_id: i64) -> StorageResult<()> {
        debug!("Deleting product: {}", product_id);

        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(product_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Fetch the persisted join rows for a product
    pub async fn tag_associations(&self, product_id: i64) -> StorageResult<Vec<TagAssociation>> {
        let rows = sqlx::query("SELECT id, tag_id FROM product_tags WHERE product_id = ? ORDER BY id")
            .bind(product_id)
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| {
                Ok(TagAssociation {
                    id: row.try_get("id")?,
                    tag_id: row.try_get("tag_id")?,
                })
            })
            .collect()
    }

    /// Apply a reconciliation delta. The two halves touch disjoint tag ids,
    /// so they run as independent statements; either can be retried alone.
    async fn apply_tag_delta(&self, product_id: i64, delta: &TagDelta) -> StorageResult<()> {
        if delta.is_empty() {
            return Ok(());
        }

        debug!(
            "Reconciling tags for product {} (delete: {}, create: {})",
            product_id,
            delta.delete.len(),
            delta.create.len()
        );

        if !delta.delete.is_empty() {
            let placeholders = vec!["?"; delta.delete.len()].join(", ");
            let query_str = format!("DELETE FROM product_tags WHERE id IN ({})", placeholders);
            let mut query = sqlx::query(&query_str);
            for association_id in &delta.delete {
                query = query.bind(*association_id);
            }
            query.execute(&self.pool).await?;
        }

        for tag_id in &delta.create {
            sqlx::query("INSERT INTO product_tags (product_id, tag_id) VALUES (?, ?)")
                .bind(product_id)
                .bind(*tag_id)
                .execute(&self.pool)
                .await?;
        }

        Ok(())
    }

    async fn product_row(&self, product_id: i64) -> StorageResult<Product> {
        let row = sqlx::query(
            "SELECT id, product_name, price, stock, category_id FROM products WHERE id = ?",
        )
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        row_to_product(&row)
    }

    async fn with_relations(&self, product: Product) -> StorageResult<ProductWithRelations> {
        let category = match product.category_id {
            Some(category_id) => self.category_for(category_id).await?,
            None => None,
        };
        let tags = self.tags_for_product(product.id).await?;

        Ok(ProductWithRelations {
            id: product.id,
            product_name: product.product_name,
            price: product.price,
            stock: product.stock,
            category_id: product.category_id,
            category,
            tags,
        })
    }

    async fn category_for(&self, category_id: i64) -> StorageResult<Option<Category>> {
        let row = sqlx::query("SELECT id, category_name FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Ok(Some(Category {
                id: row.try_get("id")?,
                category_name: row.try_get("category_name")?,
            })),
            None => Ok(None),
        }
    }

    async fn tags_for_product(&self, product_id: i64) -> StorageResult<Vec<Tag>> {
        let rows = sqlx::query(
            "SELECT t.id, t.tag_name \
             FROM tags t \
             JOIN product_tags pt ON pt.tag_id = t.id \
             WHERE pt.product_id = ? ORDER BY t.id",
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                Ok(Tag {
                    id: row.try_get("id")?,
                    tag_name: row.try_get("tag_name")?,
                })
            })
            .collect()
    }
}
