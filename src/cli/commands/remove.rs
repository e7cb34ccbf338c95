use crate::config::Config;
use crate::services::CatalogService;

pub async fn cmd_remove_product(config: &Config, id: &str, yes: bool) -> anyhow::Result<()> {
    let catalog = CatalogService::from_config(&config.storage);
    let id = id.trim();

    let Some(product) = catalog.get_product(id).await? else {
        println!("Product with ID {id} not found.");
        println!("Use 'storefront list' to see product IDs.");
        return Ok(());
    };

    if !yes {
        println!("Remove '{}' (ID: {})?", product.name, product.id);
        println!("Enter 'y' to confirm, anything else to cancel:");

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    if catalog.delete_product(id).await? {
        println!("✓ Removed: {}", product.name);
    } else {
        println!("Failed to remove product.");
    }

    Ok(())
}
