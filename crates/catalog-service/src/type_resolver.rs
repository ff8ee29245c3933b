//! Product type resolver trait definition.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, ProductType};

/// Resource name used in `NotFound` errors for product types.
pub const PRODUCT_TYPE_RESOURCE: &str = "ProductType";

/// Cache-backed lookup of product types by natural key.
#[async_trait]
pub trait TypeResolver: Interface + Send + Sync {
    /// Returns every known product type.
    async fn list_types(&self) -> CatalogResult<Vec<ProductType>>;

    /// Returns the product type whose code equals `code`.
    ///
    /// Fails with `NotFound` for an unknown code.
    async fn resolve(&self, code: &str) -> CatalogResult<ProductType>;
}
