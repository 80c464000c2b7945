// ABOUTME: SQLite storage for the storefront API
// ABOUTME: Connection management, migrations, and per-entity storage layers

pub mod categories;
pub mod db;
pub mod error;
pub mod products;
pub mod tags;

pub use db::DbState;
pub use error::{StorageError, StorageResult};

/// Embedded migrations, shared by startup and tests.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
