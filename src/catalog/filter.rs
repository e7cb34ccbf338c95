//! Catalog search, filtering and sorting.
//!
//! Runs over the full product list in memory. The four filters are
//! independent predicates; the sort always runs last.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::constants::pricing::{HIGH_CEILING, LOW_CEILING, MID_CEILING};
use crate::models::{Availability, Product};

pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityFilter {
    #[default]
    All,
    InStock,
    Limited,
    OutOfStock,
}

impl AvailabilityFilter {
    #[must_use]
    pub fn matches(self, availability: Availability) -> bool {
        match self {
            Self::All => true,
            Self::InStock => availability == Availability::InStock,
            Self::Limited => availability == Availability::Limited,
            Self::OutOfStock => availability == Availability::OutOfStock,
        }
    }
}

/// Fixed price buckets. The legacy names the storefront UI still sends are
/// accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PriceRange {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "under-500", alias = "under-50")]
    Under500,
    #[serde(rename = "500-1000", alias = "50-100")]
    From500To1000,
    #[serde(rename = "1000-5000", alias = "100-500")]
    From1000To5000,
    #[serde(rename = "over-5000", alias = "over-500")]
    Over5000,
}

impl PriceRange {
    /// Below 500; 500..=1000; above 1000 up to 5000; above 5000.
    #[must_use]
    pub fn contains(self, price: f64) -> bool {
        match self {
            Self::All => true,
            Self::Under500 => price < LOW_CEILING,
            Self::From500To1000 => (LOW_CEILING..=MID_CEILING).contains(&price),
            Self::From1000To5000 => price > MID_CEILING && price <= HIGH_CEILING,
            Self::Over5000 => price > HIGH_CEILING,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All Prices",
            Self::Under500 => "Under ₹500",
            Self::From500To1000 => "₹500 - ₹1000",
            Self::From1000To5000 => "₹1000 - ₹5000",
            Self::Over5000 => "Over ₹5000",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    Name,
    PriceLow,
    PriceHigh,
    #[default]
    Newest,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    pub search: String,
    pub category: String,
    pub availability: AvailabilityFilter,
    pub price_range: PriceRange,
    pub sort_by: SortBy,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL.to_string(),
            availability: AvailabilityFilter::All,
            price_range: PriceRange::All,
            sort_by: SortBy::Newest,
        }
    }
}

impl FilterOptions {
    /// True when any filter (not the sort order) narrows the list.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        !self.search.is_empty()
            || self.category != ALL
            || self.availability != AvailabilityFilter::All
            || self.price_range != PriceRange::All
    }

    fn matches(&self, product: &Product, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            let in_name = product.name.to_lowercase().contains(needle);
            let in_description = product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle));
            if !in_name && !in_description {
                return false;
            }
        }

        if self.category != ALL && product.category.as_deref() != Some(self.category.as_str()) {
            return false;
        }

        self.availability.matches(product.availability) && self.price_range.contains(product.price)
    }
}

/// Returns the visible subset of `products` for the given options.
#[must_use]
pub fn apply_filters(products: &[Product], options: &FilterOptions) -> Vec<Product> {
    let needle = (!options.search.is_empty()).then(|| options.search.to_lowercase());

    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| options.matches(p, needle.as_deref()))
        .cloned()
        .collect();

    sort_products(&mut visible, options.sort_by);
    visible
}

/// Stable sort in place.
pub fn sort_products(products: &mut [Product], sort_by: SortBy) {
    match sort_by {
        SortBy::Name => products.sort_by(compare_names),
        SortBy::PriceLow => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Newest => products.sort_by(|a, b| {
            let a_ms = a.created_at.map_or(0, |t| t.timestamp_millis());
            let b_ms = b.created_at.map_or(0, |t| t.timestamp_millis());
            b_ms.cmp(&a_ms)
        }),
    }
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}
