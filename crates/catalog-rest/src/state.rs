//! Application state for Axum handlers.

use catalog_core::HealthCheck;
use catalog_repository::{ProductTypeRepository, StoreHealthCheck};
use catalog_service::{CacheAdmin, ProductService, TypeResolver};
use shaku::{HasComponent, Module};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<dyn ProductService>,
    pub type_resolver: Arc<dyn TypeResolver>,
    pub cache_admin: Arc<dyn CacheAdmin>,
    /// Checks consulted by the readiness endpoint.
    pub health_checks: Vec<Arc<dyn HealthCheck>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(
        product_service: Arc<dyn ProductService>,
        type_resolver: Arc<dyn TypeResolver>,
        cache_admin: Arc<dyn CacheAdmin>,
    ) -> Self {
        Self {
            product_service,
            type_resolver,
            cache_admin,
            health_checks: Vec::new(),
        }
    }

    /// Adds a readiness check.
    #[must_use]
    pub fn with_health_check(mut self, check: Arc<dyn HealthCheck>) -> Self {
        self.health_checks.push(check);
        self
    }

    /// Resolves every service from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module
            + HasComponent<dyn ProductService>
            + HasComponent<dyn TypeResolver>
            + HasComponent<dyn CacheAdmin>
            + HasComponent<dyn ProductTypeRepository>,
    {
        let store: Arc<dyn ProductTypeRepository> = module.resolve();
        Self::new(module.resolve(), module.resolve(), module.resolve())
            .with_health_check(Arc::new(StoreHealthCheck::new(store)))
    }
}
