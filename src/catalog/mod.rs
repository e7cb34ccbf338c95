pub mod categories;
pub mod enquiry;
pub mod filter;

pub use categories::{CATEGORIES, Category, category_label};
pub use enquiry::{contact_url, enquiry_message, format_price, whatsapp_url};
pub use filter::{AvailabilityFilter, FilterOptions, PriceRange, SortBy, apply_filters};
