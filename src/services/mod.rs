pub mod product_store;
pub use product_store::{ProductStore, StoreError};

pub mod json_product_store;
pub use json_product_store::JsonProductStore;

pub mod sea_orm_product_store;
pub use sea_orm_product_store::SeaOrmProductStore;

pub mod catalog_service;
pub use catalog_service::CatalogService;

pub mod admin_auth;
pub use admin_auth::{AdminAuth, AdminSession, AuthError, session_is_valid};
