//! MySQL store implementations.

mod product_repository;
mod product_type_repository;

pub use product_repository::*;
pub use product_type_repository::*;

use catalog_core::{CatalogError, CatalogResult};

/// Converts a MySQL auto-increment id into a signed id.
fn insert_id(raw: u64) -> CatalogResult<i64> {
    i64::try_from(raw).map_err(|_| CatalogError::internal(format!("Insert id out of range: {}", raw)))
}
