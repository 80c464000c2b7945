// ABOUTME: Database connection management and storage initialization
// ABOUTME: Provides shared access to the SQLite pool and storage layers

use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

use crate::categories::CategoryStorage;
use crate::error::StorageError;
use crate::products::ProductStorage;
use crate::tags::TagStorage;

/// Shared database state for API handlers
#[derive(Clone)]
pub struct DbState {
    pub pool: SqlitePool,
    pub category_storage: Arc<CategoryStorage>,
    pub product_storage: Arc<ProductStorage>,
    pub tag_storage: Arc<TagStorage>,
}

impl DbState {
    /// Create new database state from a SQLite pool
    pub fn new(pool: SqlitePool) -> Self {
        let category_storage = Arc::new(CategoryStorage::new(pool.clone()));
        let product_storage = Arc::new(ProductStorage::new(pool.clone()));
        let tag_storage = Arc::new(TagStorage::new(pool.clone()));

        Self {
            pool,
            category_storage,
            product_storage,
            tag_storage,
        }
    }

    /// Initialize database state with default configuration
    pub async fn init() -> Result<Self, StorageError> {
        Self::init_with_path(None).await
    }

    /// Initialize database state with optional custom database path
    pub async fn init_with_path(
        database_path: Option<PathBuf>,
    ) -> Result<Self, StorageError> {
        let database_path = database_path.unwrap_or_else(|| PathBuf::from("storefront.db"));

        // Ensure parent directory exists
        if let Some(parent) = database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let database_url = format!("sqlite:{}?mode=rwc", database_path.display());

        debug!("Connecting to database: {}", database_url);

        // Configure connection pool
        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect(&database_url)
            .await?;

        // Configure SQLite settings
        sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;
        sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;
        sqlx::query("PRAGMA synchronous = NORMAL").execute(&pool).await?;

        info!("Database connection established");

        // Run migrations
        crate::MIGRATOR.run(&pool).await?;

        debug!("Database migrations completed");

        Ok(Self::new(pool))
    }
}
