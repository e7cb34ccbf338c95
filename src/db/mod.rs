use crate::models::{NewProduct, Product, ProductPatch};
use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = is_in_memory(db_url);

        // Every pooled connection to an in-memory database sees its own empty schema.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        if let Some(path_str) = db_url.strip_prefix("sqlite:")
            && !in_memory
        {
            let path_str = path_str.trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        // Recycling the only in-memory connection would drop the database.
        if !in_memory {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn product_repo(&self) -> repositories::product::ProductRepository {
        repositories::product::ProductRepository::new(self.conn.clone())
    }

    pub async fn list_products(&self) -> Result<Vec<Product>> {
        self.product_repo().list_all().await
    }

    pub async fn get_product(&self, id: &str) -> Result<Option<Product>> {
        self.product_repo().get(id).await
    }

    pub async fn count_products(&self) -> Result<u64> {
        self.product_repo().count().await
    }

    pub async fn add_product(&self, input: NewProduct) -> Result<Product> {
        self.product_repo().insert(input).await
    }

    pub async fn update_product(&self, id: &str, patch: ProductPatch) -> Result<Option<Product>> {
        self.product_repo().update(id, patch).await
    }

    pub async fn remove_product(&self, id: &str) -> Result<bool> {
        self.product_repo().delete(id).await
    }
}

/// `sqlite::memory:` and `sqlite://:memory:` name a per-connection database.
fn is_in_memory(db_url: &str) -> bool {
    db_url
        .strip_prefix("sqlite:")
        .is_some_and(|p| p.trim_start_matches("//").starts_with(":memory:"))
}
