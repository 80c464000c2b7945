// ABOUTME: Tag storage layer using SQLite
// ABOUTME: Handles CRUD operations for tags with their product listings

use sqlx::SqlitePool;
use tracing::debug;

use super::{Tag, TagCreateInput, TagUpdateInput, TagWithProducts};
use crate::error::{StorageError, StorageResult};
use crate::products::{row_to_product, Product};

pub struct TagStorage {
    pool: SqlitePool,
}

impl TagStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all tags, each with the products carrying it
    pub async fn list_tags(&self) -> StorageResult<Vec<TagWithProducts>> {
        debug!("Fetching tags");

        let rows = sqlx::query("SELECT id, tag_name FROM tags ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut tags = Vec::with_capacity(rows.len());
        for row in &rows {
            let tag = row_to_tag(row)?;
            let products = self.products_for_tag(tag.id).await?;
            tags.push(TagWithProducts {
                id: tag.id,
                tag_name: tag.tag_name,
                products,
            });
        }

        Ok(tags)
    }

    /// Get a single tag by ID, with the products carrying it
    pub async fn get_tag(&self, tag_id: i64) -> StorageResult<TagWithProducts> {
        debug!("Fetching tag: {}", tag_id);

        let row = sqlx::query("SELECT id, tag_name FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        let tag = row_to_tag(&row)?;
        let products = self.products_for_tag(tag.id).await?;

        Ok(TagWithProducts {
            id: tag.id,
            tag_name: tag.tag_name,
            products,
        })
    }

    /// Create a new tag
    pub async fn create_tag(&self, input: TagCreateInput) -> StorageResult<Tag> {
        debug!("Creating tag (name: {})", input.tag_name);

        let result = sqlx::query("INSERT INTO tags (tag_name) VALUES (?)")
            .bind(&input.tag_name)
            .execute(&self.pool)
            .await?;

        self.tag_row(result.last_insert_rowid()).await
    }

    /// Update a tag's name
    pub async fn update_tag(&self, tag_id: i64, input: TagUpdateInput) -> StorageResult<Tag> {
        debug!("Updating tag: {}", tag_id);

        let Some(tag_name) = input.tag_name else {
            return self.tag_row(tag_id).await;
        };

        let result = sqlx::query("UPDATE tags SET tag_name = ? WHERE id = ?")
            .bind(&tag_name)
            .bind(tag_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.tag_row(tag_id).await
    }

    /// Delete a tag; its product associations are removed with it
    pub async fn delete_tag(&self, tag_id: i64) -> StorageResult<()> {
        debug!("Deleting tag: {}", tag_id);

        let result = sqlx::query("DELETE FROM tags WHERE id = ?")
            .bind(tag_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn tag_row(&self, tag_id: i64) -> StorageResult<Tag> {
        let row = sqlx::query("SELECT id, tag_name FROM tags WHERE id = ?")
            .bind(tag_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        row_to_tag(&row)
    }

    async fn products_for_tag(&self, tag_id: i64) -> StorageResult<Vec<Product>> {
        let rows = sqlx::query(
            "SELECT p.id, p.product_name, p.price, p.stock, p.category_id \
             FROM products p \
             JOIN product_tags pt ON pt.product_id = p.id \
             WHERE pt.tag_id = ? ORDER BY p.id",
        )
        .bind(tag_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_product).collect()
    }
}

fn row_to_tag(row: &sqlx::sqlite::SqliteRow) -> StorageResult<Tag> {
    use sqlx::Row;

    Ok(Tag {
        id: row.try_get("id")?,
        tag_name: row.try_get("tag_name")?,
    })
}
