pub mod product;

pub use product::{Availability, NewProduct, Product, ProductPatch};
