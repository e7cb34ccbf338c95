//! List products command handler

use crate::catalog::{FilterOptions, PriceRange, apply_filters, category_label, format_price};
use crate::config::Config;
use crate::models::Availability;
use crate::services::CatalogService;

pub async fn cmd_list_products(config: &Config, options: &FilterOptions) -> anyhow::Result<()> {
    let catalog = CatalogService::from_config(&config.storage);
    let products = catalog.list_products().await?;
    let total = products.len();
    let visible = apply_filters(&products, options);

    if visible.is_empty() {
        if total == 0 {
            println!("No products yet.");
            println!();
            println!("Add one with: storefront add --name <name> --price <price> --image <url>");
        } else {
            println!("No products match the current filters ({total} in catalog).");
        }
        return Ok(());
    }

    if options.has_active_filters() {
        println!("Products ({} of {} shown)", visible.len(), total);
        if options.price_range != PriceRange::All {
            println!("Price: {}", options.price_range.label());
        }
    } else {
        println!("Products ({total} total)");
    }
    println!("{:-<70}", "");

    for product in visible {
        let indicator = match product.availability {
            Availability::InStock => "🟢",
            Availability::Limited => "🟡",
            Availability::OutOfStock => "🔴",
        };

        println!(
            "{} {} [{}]",
            indicator,
            product.name,
            format_price(product.price)
        );

        let category = product.category.as_deref().map_or("-", category_label);
        println!(
            "  ID: {} | Category: {} | {}",
            product.id,
            category,
            product.availability.label()
        );
    }

    println!();
    println!("Legend: 🟢 In stock | 🟡 Limited | 🔴 Out of stock");
    println!("Backend: {}", catalog.backend_name());

    Ok(())
}
