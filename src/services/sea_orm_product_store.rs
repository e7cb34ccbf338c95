//! `SeaORM` implementation of the `ProductStore` trait.
//!
//! The connection is opened on first use. A failed connect is returned as an
//! error for that call and attempted again on the next one.

use async_trait::async_trait;
use tokio::sync::OnceCell;
use tracing::info;

use crate::db::Store;
use crate::models::{NewProduct, Product, ProductPatch};
use crate::services::product_store::{ProductStore, StoreError};

pub struct SeaOrmProductStore {
    url: String,
    max_connections: u32,
    min_connections: u32,
    store: OnceCell<Store>,
}

impl SeaOrmProductStore {
    pub fn new(url: impl Into<String>, max_connections: u32, min_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
            min_connections,
            store: OnceCell::new(),
        }
    }

    /// Wraps an already connected store.
    #[must_use]
    pub fn from_store(store: Store) -> Self {
        Self {
            url: String::new(),
            max_connections: 0,
            min_connections: 0,
            store: OnceCell::new_with(Some(store)),
        }
    }

    async fn store(&self) -> Result<&Store, StoreError> {
        self.store
            .get_or_try_init(|| async {
                info!("Connecting to product database");
                Store::with_pool_options(&self.url, self.max_connections, self.min_connections)
                    .await
                    .map_err(|e| StoreError::Database(format!("{e:#}")))
            })
            .await
    }
}

fn db_error(err: anyhow::Error) -> StoreError {
    StoreError::Database(format!("{err:#}"))
}

#[async_trait]
impl ProductStore for SeaOrmProductStore {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.store().await?.list_products().await.map_err(db_error)
    }

    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError> {
        self.store().await?.get_product(id).await.map_err(db_error)
    }

    async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        self.store().await?.add_product(input).await.map_err(db_error)
    }

    async fn update(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        self.store()
            .await?
            .update_product(id, patch)
            .await
            .map_err(db_error)
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        self.store().await?.remove_product(id).await.map_err(db_error)
    }
}
