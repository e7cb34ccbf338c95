use crate::catalog::format_price;
use crate::config::Config;
use crate::models::NewProduct;
use crate::services::{CatalogService, StoreError};

pub async fn cmd_add_product(config: &Config, input: NewProduct) -> anyhow::Result<()> {
    let catalog = CatalogService::from_config(&config.storage);

    match catalog.create_product(input).await {
        Ok(product) => {
            println!(
                "✓ Added: {} ({}) [ID: {}]",
                product.name,
                format_price(product.price),
                product.id
            );
            Ok(())
        }
        Err(StoreError::Validation(msg)) => {
            println!("Cannot add product: {msg}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
