//! Persistence contract shared by the database and JSON file backends.

use crate::models::{NewProduct, Product, ProductPatch};
use thiserror::Error;

/// Errors a product backend can report. A missing record is not an error:
/// lookups return `None` and deletes return `false`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// CRUD over the product catalog.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// Short backend name for logs and status output.
    fn name(&self) -> &'static str;

    /// Lists every product.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// Gets a product by id.
    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Creates a product, assigning its id and timestamps.
    async fn create(&self, input: NewProduct) -> Result<Product, StoreError>;

    /// Merges `patch` over the stored record and refreshes `updated_at`.
    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>, StoreError>;

    /// Deletes a product. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
