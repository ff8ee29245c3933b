//! In-memory product repository.

use crate::traits::ProductRepository;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, NewProduct, Product, ProductId};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Products kept in a map keyed by id.
#[derive(Component, Default)]
#[shaku(interface = ProductRepository)]
pub struct InMemoryProductRepository {
    #[shaku(default)]
    products: RwLock<HashMap<ProductId, Product>>,
    #[shaku(default)]
    last_id: AtomicI64,
}

impl InMemoryProductRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> CatalogResult<Option<Product>> {
        Ok(self.products.read().get(&id).cloned())
    }

    async fn insert(&self, product: &NewProduct) -> CatalogResult<Product> {
        let id = ProductId(self.last_id.fetch_add(1, Ordering::SeqCst) + 1);
        let stored = product.clone().into_product(id);
        self.products.write().insert(id, stored.clone());
        Ok(stored)
    }

    async fn update(&self, product: &Product) -> CatalogResult<Product> {
        let mut products = self.products.write();
        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product.clone();
                Ok(product.clone())
            }
            None => Err(CatalogError::not_found("Product", product.id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{ProductType, ProductTypeId};
    use chrono::NaiveDate;

    fn new_product(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            product_type: ProductType::new(ProductTypeId(1), "X1", None),
            category: "category".to_string(),
            sub_category: "subCategory".to_string(),
            role_start: NaiveDate::from_ymd_opt(2021, 1, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            role_end: None,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();
        let first = repo.insert(&new_product("a")).await.unwrap();
        let second = repo.insert(&new_product("b")).await.unwrap();
        assert_eq!(first.id, ProductId(1));
        assert_eq!(second.id, ProductId(2));
    }

    #[tokio::test]
    async fn test_find_by_id_not_found() {
        let repo = InMemoryProductRepository::new();
        assert!(repo.find_by_id(ProductId(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_replaces_stored_product() {
        let repo = InMemoryProductRepository::new();
        let mut product = repo.insert(&new_product("a")).await.unwrap();
        product.name = "renamed".to_string();
        repo.update(&product).await.unwrap();

        let found = repo.find_by_id(product.id).await.unwrap().unwrap();
        assert_eq!(found.name, "renamed");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = InMemoryProductRepository::new();
        let product = new_product("ghost").into_product(ProductId(5));
        let err = repo.update(&product).await.unwrap_err();
        assert!(err.is_not_found_for("Product"));
    }
}
