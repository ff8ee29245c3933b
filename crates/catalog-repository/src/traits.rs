//! Repository trait definitions.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, NewProduct, NewProductType, Product, ProductId, ProductType};

/// Store of product types, looked up by natural key.
#[async_trait]
pub trait ProductTypeRepository: Interface + Send + Sync {
    /// Finds a product type by its exact, case-sensitive code.
    async fn find_by_code(&self, code: &str) -> CatalogResult<Option<ProductType>>;

    /// Returns every product type ordered by id.
    async fn find_all(&self) -> CatalogResult<Vec<ProductType>>;

    /// Stores a new product type. Fails with `Conflict` when the code exists.
    async fn create(&self, product_type: &NewProductType) -> CatalogResult<ProductType>;

    /// Checks that the store is reachable.
    async fn health_check(&self) -> CatalogResult<()> {
        Ok(())
    }
}

/// Store of products.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Finds a product by id.
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>>;

    /// Stores a new product and returns it with its assigned id.
    async fn insert(&self, product: &NewProduct) -> CatalogResult<Product>;

    /// Replaces a stored product. Fails with `NotFound` when the id is unknown.
    async fn update(&self, product: &Product) -> CatalogResult<Product>;
}
