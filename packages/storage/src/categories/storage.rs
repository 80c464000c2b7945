// ABOUTME: Category storage layer using SQLite
// ABOUTME: Handles CRUD operations for categories with their product listings

use sqlx::SqlitePool;
use tracing::debug;

use super::{Category, CategoryCreateInput, CategoryUpdateInput, CategoryWithProducts};
use crate::error::{StorageError, StorageResult};
use crate::products::{row_to_product, Product};

pub struct CategoryStorage {
    pool: SqlitePool,
}

impl CategoryStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all categories, each with its associated products
    pub async fn list_categories(&self) -> StorageResult<Vec<CategoryWithProducts>> {
        debug!("Fetching categories");

        let rows = sqlx::query("SELECT id, category_name FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut categories = Vec::with_capacity(rows.len());
        for row in &rows {
            let category = row_to_category(row)?;
            let products = self.products_for_category(category.id).await?;
            categories.push(CategoryWithProducts {
                id: category.id,
                category_name: category.category_name,
                products,
            });
        }

        Ok(categories)
    }

    /// Get a single category by ID, with its associated products
    pub async fn get_category(&self, category_id: i64) -> StorageResult<CategoryWithProducts> {
        debug!("Fetching category: {}", category_id);

        let row = sqlx::query("SELECT id, category_name FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        let category = row_to_category(&row)?;
        let products = self.products_for_category(category.id).await?;

        Ok(CategoryWithProducts {
            id: category.id,
            category_name: category.category_name,
            products,
        })
    }

    /// Create a new category
    pub async fn create_category(&self, input: CategoryCreateInput) -> StorageResult<Category> {
        debug!("Creating category (name: {})", input.category_name);

        let result = sqlx::query("INSERT INTO categories (category_name) VALUES (?)")
            .bind(&input.category_name)
            .execute(&self.pool)
            .await?;

        self.category_row(result.last_insert_rowid()).await
    }

    /// Update a category's name
    pub async fn update_category(
        &self,
        category_id: i64,
        input: CategoryUpdateInput,
    ) -> StorageResult<Category> {
        debug!("Updating category: {}", category_id);

        let Some(category_name) = input.category_name else {
            return self.category_row(category_id).await;
        };

        let result = sqlx::query("UPDATE categories SET category_name = ? WHERE id = ?")
            .bind(&category_name)
            .bind(category_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.category_row(category_id).await
    }

    /// Delete a category; products keep existing with their category cleared
    pub async fn delete_category(&self, category_id: i64) -> StorageResult<()> {
        debug!("Deleting category: {}", category_id);

        let result = sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(category_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    async fn category_row(&self, category_id: i64) -> StorageResult<Category> {
        let row = sqlx::query("SELECT id, category_name FROM categories WHERE id = ?")
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StorageError::NotFound)?;

        row_to_category(&row)
    }

    async fn products_for_category(&self, category_id: i64) -> StorageResult<Vec<Product>> {
        let rows = sqlx::query(
            "SELECT id, product_name, price, stock, category_id FROM products \
             WHERE category_id = ? ORDER BY id",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_product).collect()
    }
}

fn row_to_category(row: &sqlx::sqlite::SqliteRow) -> StorageResult<Category> {
    use sqlx::Row;

    Ok(Category {
        id: row.try_get("id")?,
        category_name: row.try_get("category_name")?,
    })
}
