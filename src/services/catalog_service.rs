//! Storage façade over the product backends.
//!
//! The primary backend is chosen once at startup. When a database is
//! configured it answers first; any error it returns is logged and the same
//! operation is retried against the JSON file. The two backends are not kept
//! in sync.

use std::future::Future;
use std::sync::Arc;

use tracing::warn;

use crate::config::StorageConfig;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::services::json_product_store::JsonProductStore;
use crate::services::product_store::{ProductStore, StoreError};
use crate::services::sea_orm_product_store::SeaOrmProductStore;

#[derive(Clone)]
pub struct CatalogService {
    primary: Option<Arc<dyn ProductStore>>,
    file: Arc<JsonProductStore>,
}

impl CatalogService {
    /// File backend only.
    #[must_use]
    pub fn file_only(file: JsonProductStore) -> Self {
        Self {
            primary: None,
            file: Arc::new(file),
        }
    }

    /// `primary` answers first; `file` takes over when it fails.
    #[must_use]
    pub fn with_primary(primary: Arc<dyn ProductStore>, file: JsonProductStore) -> Self {
        Self {
            primary: Some(primary),
            file: Arc::new(file),
        }
    }

    #[must_use]
    pub fn from_config(storage: &StorageConfig) -> Self {
        let file = JsonProductStore::new(&storage.data_file);

        match storage.database_url() {
            Some(url) => {
                let db = SeaOrmProductStore::new(
                    url,
                    storage.max_db_connections,
                    storage.min_db_connections,
                );
                Self::with_primary(Arc::new(db), file)
            }
            None => Self::file_only(file),
        }
    }

    /// Name of the backend that answers first.
    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        self.primary
            .as_ref()
            .map_or_else(|| self.file.name(), |p| p.name())
    }

    #[must_use]
    pub fn file_store(&self) -> &JsonProductStore {
        &self.file
    }

    async fn run<T, F, Fut>(&self, operation: &'static str, call: F) -> Result<T, StoreError>
    where
        F: Fn(Arc<dyn ProductStore>) -> Fut,
        Fut: Future<Output = Result<T, StoreError>>,
    {
        let file: Arc<dyn ProductStore> = self.file.clone();

        let Some(primary) = &self.primary else {
            return call(file).await;
        };

        match call(primary.clone()).await {
            Ok(value) => Ok(value),
            Err(e) => {
                warn!(
                    operation,
                    backend = primary.name(),
                    error = %e,
                    "Primary product store failed, falling back to JSON file"
                );
                metrics::counter!("storefront_storage_fallbacks_total", "operation" => operation)
                    .increment(1);
                call(file).await
            }
        }
    }

    pub async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        self.run("list", |store| async move { store.list().await })
            .await
    }

    pub async fn get_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        self.run("get", |store| async move { store.get(id).await })
            .await
    }

    pub async fn create_product(&self, input: NewProduct) -> Result<Product, StoreError> {
        let input = input.normalized();
        input.validate().map_err(StoreError::Validation)?;

        self.run("create", |store| {
            let input = input.clone();
            async move { store.create(input).await }
        })
        .await
    }

    pub async fn update_product(
        &self,
        id: &str,
        patch: ProductPatch,
    ) -> Result<Option<Product>, StoreError> {
        let patch = patch.normalized();
        patch.validate().map_err(StoreError::Validation)?;

        self.run("update", |store| {
            let patch = patch.clone();
            async move { store.update(id, patch).await }
        })
        .await
    }

    pub async fn delete_product(&self, id: &str) -> Result<bool, StoreError> {
        self.run("delete", |store| async move { store.delete(id).await })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection_follows_database_url() {
        let mut storage = StorageConfig::default();
        assert_eq!(CatalogService::from_config(&storage).backend_name(), "file");

        storage.database_url = Some("sqlite::memory:".to_string());
        assert_eq!(
            CatalogService::from_config(&storage).backend_name(),
            "database"
        );

        storage.database_url = Some(String::new());
        assert_eq!(CatalogService::from_config(&storage).backend_name(), "file");
    }
}
