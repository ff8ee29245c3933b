//! In-memory product type repository.

use crate::traits::ProductTypeRepository;
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, NewProductType, ProductType, ProductTypeId};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Product types kept in a map keyed by code.
#[derive(Component, Default)]
#[shaku(interface = ProductTypeRepository)]
pub struct InMemoryProductTypeRepository {
    #[shaku(default)]
    types: RwLock<HashMap<String, ProductType>>,
    #[shaku(default)]
    last_id: AtomicI64,
}

impl InMemoryProductTypeRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding the given types, ids assigned in order.
    #[must_use]
    pub fn with_types(types: Vec<NewProductType>) -> Self {
        let repo = Self::new();
        {
            let mut map = repo.types.write();
            for new_type in types {
                let id = repo.last_id.fetch_add(1, Ordering::SeqCst) + 1;
                map.insert(new_type.code.clone(), new_type.into_product_type(ProductTypeId(id)));
            }
        }
        repo
    }

    /// Creates a repository holding the default product types.
    #[must_use]
    pub fn with_default_types() -> Self {
        Self::with_types(catalog_core::default_product_types())
    }
}

#[async_trait]
impl ProductTypeRepository for InMemoryProductTypeRepository {
    async fn find_by_code(&self, code: &str) -> CatalogResult<Option<ProductType>> {
        Ok(self.types.read().get(code).cloned())
    }

    async fn find_all(&self) -> CatalogResult<Vec<ProductType>> {
        let mut all: Vec<ProductType> = self.types.read().values().cloned().collect();
        all.sort_by_key(|t| t.id);
        Ok(all)
    }

    async fn create(&self, product_type: &NewProductType) -> CatalogResult<ProductType> {
        let mut types = self.types.write();
        if types.contains_key(&product_type.code) {
            return Err(CatalogError::conflict(format!(
                "Product type {} already exists",
                product_type.code
            )));
        }
        let id = self.last_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = product_type.clone().into_product_type(ProductTypeId(id));
        types.insert(stored.code.clone(), stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_default_types;

    #[tokio::test]
    async fn test_default_types_are_present() {
        let repo = InMemoryProductTypeRepository::with_default_types();
        let x1 = repo.find_by_code("X1").await.unwrap().unwrap();
        assert_eq!(x1.id, ProductTypeId(1));
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_find_by_code_is_case_sensitive() {
        let repo = InMemoryProductTypeRepository::with_default_types();
        assert!(repo.find_by_code("x1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_all_ordered_by_id() {
        let repo = InMemoryProductTypeRepository::with_default_types();
        let codes: Vec<_> = repo.find_all().await.unwrap().into_iter().map(|t| t.code).collect();
        assert_eq!(codes, vec!["X1", "R3", "R4"]);
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let repo = InMemoryProductTypeRepository::with_default_types();
        let created = repo.create(&NewProductType::new("Z9", "Late")).await.unwrap();
        assert_eq!(created.id, ProductTypeId(4));
        assert_eq!(repo.find_by_code("Z9").await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let repo = InMemoryProductTypeRepository::with_default_types();
        let err = repo.create(&NewProductType::new("R3", "Again")).await.unwrap_err();
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_seed_only_creates_missing() {
        let repo = InMemoryProductTypeRepository::with_types(vec![NewProductType::new("X1", "Standard product")]);
        assert_eq!(seed_default_types(&repo).await.unwrap(), 2);
        assert_eq!(seed_default_types(&repo).await.unwrap(), 0);
        assert_eq!(repo.find_all().await.unwrap().len(), 3);
    }
}
