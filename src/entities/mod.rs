pub mod prelude;

pub mod products;
