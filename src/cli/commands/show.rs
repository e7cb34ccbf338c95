use crate::catalog::{category_label, enquiry_message, format_price, whatsapp_url};
use crate::config::Config;
use crate::services::CatalogService;

pub async fn cmd_show_product(config: &Config, id: &str) -> anyhow::Result<()> {
    let catalog = CatalogService::from_config(&config.storage);

    let Some(product) = catalog.get_product(id.trim()).await? else {
        println!("Product with ID {id} not found.");
        println!("Use 'storefront list' to see product IDs.");
        return Ok(());
    };

    println!("{}", product.name);
    println!("{:-<70}", "");
    println!("ID:           {}", product.id);
    println!("Price:        {}", format_price(product.price));
    println!("Availability: {}", product.availability.label());
    if let Some(category) = &product.category {
        println!("Category:     {}", category_label(category));
    }
    println!("Image:        {}", product.image);
    if let Some(description) = &product.description {
        println!();
        println!("{description}");
    }
    if let Some(created_at) = product.created_at {
        println!();
        println!("Added: {}", created_at.format("%Y-%m-%d %H:%M"));
    }

    let message = enquiry_message(&product);
    println!();
    println!(
        "Enquiry: {}",
        whatsapp_url(&config.enquiry.whatsapp_number, &message)
    );

    Ok(())
}
