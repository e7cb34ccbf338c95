//! CLI module - Command-line interface for the storefront
//!
//! Parses arguments with clap; catalog commands run against the same
//! storage backends as the HTTP server.

mod commands;

use clap::{Parser, Subcommand};

use crate::catalog::{AvailabilityFilter, PriceRange, SortBy};
use crate::models::Availability;

/// Storefront - product catalog backend
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    #[command(alias = "web")]
    Serve,

    /// List products, optionally filtered and sorted
    #[command(alias = "ls", alias = "l")]
    List {
        /// Case-insensitive text matched against name and description
        #[arg(long)]
        search: Option<String>,
        /// Category slug
        #[arg(long)]
        category: Option<String>,
        #[arg(long, value_parser = parse_availability_filter)]
        availability: Option<AvailabilityFilter>,
        #[arg(long, value_parser = parse_price_range)]
        price_range: Option<PriceRange>,
        #[arg(long, value_parser = parse_sort_by)]
        sort_by: Option<SortBy>,
    },

    /// Show one product and its enquiry link
    #[command(alias = "i", alias = "info")]
    Show {
        /// Product ID
        id: String,
    },

    /// Add a product
    #[command(alias = "a")]
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: f64,
        /// Image URL or path
        #[arg(long)]
        image: String,
        #[arg(long, value_parser = parse_availability)]
        availability: Option<Availability>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a product
    #[command(alias = "rm", alias = "r")]
    Remove {
        /// Product ID to remove
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

fn parse_availability(value: &str) -> Result<Availability, String> {
    value.parse()
}

fn parse_availability_filter(value: &str) -> Result<AvailabilityFilter, String> {
    parse_kebab(value)
}

fn parse_price_range(value: &str) -> Result<PriceRange, String> {
    parse_kebab(value)
}

fn parse_sort_by(value: &str) -> Result<SortBy, String> {
    parse_kebab(value)
}

/// Reuses the serde names so CLI flags accept the same values as the HTTP query.
fn parse_kebab<T: serde::de::DeserializeOwned>(value: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(value.to_string()))
        .map_err(|_| format!("unknown value '{value}'"))
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_flags_accept_query_values() {
        let cli = Cli::try_parse_from([
            "storefront",
            "list",
            "--price-range",
            "1000-5000",
            "--sort-by",
            "price-low",
            "--availability",
            "in-stock",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::List {
                price_range,
                sort_by,
                availability,
                ..
            }) => {
                assert_eq!(price_range, Some(PriceRange::From1000To5000));
                assert_eq!(sort_by, Some(SortBy::PriceLow));
                assert_eq!(availability, Some(AvailabilityFilter::InStock));
            }
            _ => panic!("expected list command"),
        }
    }

    #[test]
    fn test_legacy_price_range_alias() {
        assert_eq!(parse_price_range("100-500"), Ok(PriceRange::From1000To5000));
        assert!(parse_price_range("cheap").is_err());
    }

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["storefront"]).unwrap();
        assert!(cli.command.is_none());
    }
}
