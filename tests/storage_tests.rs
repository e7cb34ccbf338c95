use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use storefront::db::Store;
use storefront::models::{Availability, NewProduct, Product, ProductPatch};
use storefront::services::{
    CatalogService, JsonProductStore, ProductStore, SeaOrmProductStore, StoreError,
};

fn temp_data_file() -> PathBuf {
    std::env::temp_dir().join(format!("storefront-store-{}.json", uuid::Uuid::new_v4()))
}

fn sample(name: &str, price: f64) -> NewProduct {
    NewProduct::new(name, price, format!("/images/{}.jpg", name.to_lowercase()))
}

/// Primary store whose every call fails, counting how often it was asked.
#[derive(Default)]
struct UnreachableStore {
    calls: AtomicUsize,
}

impl UnreachableStore {
    fn fail<T>(&self) -> Result<T, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Database("connection refused".to_string()))
    }
}

#[async_trait]
impl ProductStore for UnreachableStore {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        self.fail()
    }

    async fn get(&self, _id: &str) -> Result<Option<Product>, StoreError> {
        self.fail()
    }

    async fn create(&self, _input: NewProduct) -> Result<Product, StoreError> {
        self.fail()
    }

    async fn update(&self, _id: &str, _patch: ProductPatch) -> Result<Option<Product>, StoreError> {
        self.fail()
    }

    async fn delete(&self, _id: &str) -> Result<bool, StoreError> {
        self.fail()
    }
}

#[tokio::test]
async fn test_json_store_missing_and_corrupt_file_read_as_empty() {
    let path = temp_data_file();
    let store = JsonProductStore::new(&path);
    assert!(store.list().await.unwrap().is_empty());

    std::fs::write(&path, "{ not json").unwrap();
    assert!(store.list().await.unwrap().is_empty());
    assert!(store.get("anything").await.unwrap().is_none());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_json_store_create_get_update() {
    let path = temp_data_file();
    let store = JsonProductStore::new(&path);

    let created = store
        .create(sample("Rice", 450.0).with_category("rice-pulses"))
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert!(created.created_at.is_some());

    let fetched = store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);

    let second = store.create(sample("Dal", 120.0)).await.unwrap();
    assert_ne!(second.id, created.id);

    let updated = store
        .update(
            &created.id,
            ProductPatch {
                availability: Some(Availability::OutOfStock),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.availability, Availability::OutOfStock);
    assert_eq!(updated.name, "Rice");
    assert_eq!(updated.created_at, created.created_at);

    assert!(
        store
            .update("nope", ProductPatch::default())
            .await
            .unwrap()
            .is_none()
    );

    assert_eq!(store.list().await.unwrap().len(), 2);
    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_json_store_delete_unknown_leaves_file_untouched() {
    let path = temp_data_file();
    let store = JsonProductStore::new(&path);
    let created = store.create(sample("Oil", 900.0)).await.unwrap();

    let before = std::fs::read(&path).unwrap();
    assert!(!store.delete("missing-id").await.unwrap());
    assert_eq!(std::fs::read(&path).unwrap(), before);

    assert!(store.delete(&created.id).await.unwrap());
    assert!(store.list().await.unwrap().is_empty());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_database_store_crud() {
    let store = SeaOrmProductStore::new("sqlite::memory:", 5, 1);

    let created = store
        .create(
            sample("Ghee", 650.0)
                .with_availability(Availability::Limited)
                .with_description("Pure cow ghee"),
        )
        .await
        .unwrap();
    assert_eq!(created.availability, Availability::Limited);
    assert_eq!(created.description.as_deref(), Some("Pure cow ghee"));

    let fetched = store.get(&created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Ghee");
    assert_eq!(fetched.price, 650.0);

    let updated = store
        .update(
            &created.id,
            ProductPatch {
                price: Some(700.0),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.price, 700.0);
    assert_eq!(updated.created_at, created.created_at);

    assert_eq!(store.list().await.unwrap().len(), 1);
    assert!(store.delete(&created.id).await.unwrap());
    assert!(!store.delete(&created.id).await.unwrap());
    assert!(store.get(&created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_database_rejects_invalid_record() {
    let store = Store::new("sqlite::memory:").await.unwrap();

    let result = store.add_product(sample("Broken", -10.0)).await;
    assert!(result.is_err());
    assert_eq!(store.count_products().await.unwrap(), 0);
}

#[tokio::test]
async fn test_catalog_falls_back_to_file_on_primary_failure() {
    let path = temp_data_file();
    let primary = Arc::new(UnreachableStore::default());
    let catalog = CatalogService::with_primary(primary.clone(), JsonProductStore::new(&path));
    assert_eq!(catalog.backend_name(), "database");

    let created = catalog.create_product(sample("Tea", 250.0)).await.unwrap();
    assert_eq!(primary.calls.load(Ordering::SeqCst), 1);

    let on_file = JsonProductStore::new(&path).list().await.unwrap();
    assert_eq!(on_file.len(), 1);
    assert_eq!(on_file[0].id, created.id);

    let listed = catalog.list_products().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert!(catalog.delete_product(&created.id).await.unwrap());
    assert_eq!(primary.calls.load(Ordering::SeqCst), 3);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn test_catalog_validation_does_not_reach_any_store() {
    let path = temp_data_file();
    let primary = Arc::new(UnreachableStore::default());
    let catalog = CatalogService::with_primary(primary.clone(), JsonProductStore::new(&path));

    let err = catalog
        .create_product(sample("   ", 10.0))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(primary.calls.load(Ordering::SeqCst), 0);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_catalog_prefers_working_database() {
    let path = temp_data_file();
    let store = Store::new("sqlite::memory:").await.unwrap();
    let catalog = CatalogService::with_primary(
        Arc::new(SeaOrmProductStore::from_store(store.clone())),
        JsonProductStore::new(&path),
    );

    catalog.create_product(sample("Salt", 20.0)).await.unwrap();

    assert_eq!(store.count_products().await.unwrap(), 1);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_unreachable_database_falls_back_and_reconnects_later() {
    let data_file = temp_data_file();
    // A regular file where the database directory should be makes the connect fail.
    let blocker = std::env::temp_dir().join(format!("storefront-db-{}", uuid::Uuid::new_v4()));
    std::fs::write(&blocker, b"not a directory").unwrap();
    let db_url = format!("sqlite://{}/shop.db", blocker.display());

    let catalog = CatalogService::with_primary(
        Arc::new(SeaOrmProductStore::new(db_url, 1, 1)),
        JsonProductStore::new(&data_file),
    );

    let first = catalog.create_product(sample("Tea", 250.0)).await.unwrap();
    let on_file = JsonProductStore::new(&data_file).list().await.unwrap();
    assert_eq!(on_file.len(), 1);
    assert_eq!(on_file[0].id, first.id);

    std::fs::remove_file(&blocker).unwrap();

    let second = catalog.create_product(sample("Coffee", 320.0)).await.unwrap();
    assert_eq!(JsonProductStore::new(&data_file).list().await.unwrap().len(), 1);

    let from_database = catalog.list_products().await.unwrap();
    assert_eq!(from_database.len(), 1);
    assert_eq!(from_database[0].id, second.id);
    assert_eq!(from_database[0].name, "Coffee");

    let _ = std::fs::remove_file(&data_file);
    let _ = std::fs::remove_dir_all(&blocker);
}
