//! Domain entities of the product catalog.

pub mod product;
pub mod product_type;

pub use product::*;
pub use product_type::*;
