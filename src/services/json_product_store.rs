//! Flat-file product backend.
//!
//! The whole catalog lives in one pretty-printed JSON array. Every write
//! rewrites the full file; there is no locking, so concurrent writers race
//! and the last one wins.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::product::now_millis;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::services::product_store::{ProductStore, StoreError};

#[derive(Debug, Clone)]
pub struct JsonProductStore {
    path: PathBuf,
}

impl JsonProductStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Missing or unparsable files read as an empty catalog.
    async fn read_products(&self) -> Result<Vec<Product>, StoreError> {
        self.ensure_parent_dir().await?;

        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read products file");
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str::<Vec<Product>>(&content) {
            Ok(products) => Ok(products),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Products file is not valid JSON, treating catalog as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_products(&self, products: &[Product]) -> Result<(), StoreError> {
        self.ensure_parent_dir().await?;
        let content = serde_json::to_string_pretty(products)?;
        tokio::fs::write(&self.path, content).await?;
        debug!(path = %self.path.display(), count = products.len(), "Wrote products file");
        Ok(())
    }
}

/// Millisecond timestamp id, bumped until it is unused in `existing`.
fn next_id(existing: &[Product], now_ms: i64) -> String {
    let mut candidate = now_ms;
    loop {
        let id = candidate.to_string();
        if existing.iter().all(|p| p.id != id) {
            return id;
        }
        candidate += 1;
    }
}

#[async_trait]
impl ProductStore for JsonProductStore {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.read_products().await
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let products = self.read_products().await?;
        Ok(products.into_iter().find(|p| p.id == id))
    }

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let mut products = self.read_products().await?;
        let now = now_millis();

        let product = Product::from_new(next_id(&products, now.timestamp_millis()), input, now);
        products.push(product.clone());
        self.write_products(&products).await?;

        Ok(product)
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        let mut products = self.read_products().await?;

        let Some(product) = products.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };
        product.apply_patch(patch, now_millis());
        let updated = product.clone();

        self.write_products(&products).await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut products = self.read_products().await?;
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Ok(false);
        }

        self.write_products(&products).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_next_id_skips_taken_ids() {
        let taken = Product::from_new(
            "1700000000000".to_string(),
            NewProduct::new("Soap", 40.0, "soap.png"),
            Utc::now(),
        );

        assert_eq!(next_id(&[], 1_700_000_000_000), "1700000000000");
        assert_eq!(next_id(&[taken], 1_700_000_000_000), "1700000000001");
    }
}
