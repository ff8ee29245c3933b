//! Product service trait definition.

use crate::dto::{ProductRequest, ProductResponse};
use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, ProductId};

/// Resource name used in `NotFound` errors for products.
pub const PRODUCT_RESOURCE: &str = "Product";

/// Product CRUD.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Gets a product by id.
    async fn get_product(&self, id: ProductId) -> CatalogResult<ProductResponse>;

    /// Binds and stores a new product.
    async fn create_product(&self, request: ProductRequest) -> CatalogResult<ProductResponse>;

    /// Binds the request and replaces every mutable field of a stored product.
    ///
    /// The request is bound before the id is looked up.
    async fn update_product(&self, id: ProductId, request: ProductRequest) -> CatalogResult<ProductResponse>;
}
