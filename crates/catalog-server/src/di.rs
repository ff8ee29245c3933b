//! Dependency injection modules using Shaku.
//!
//! - `MySqlModule`: stores backed by a MySQL pool
//! - `InMemoryModule`: process-local stores, used for demos and tests
//!
//! Both share the same cache, resolver, admin, and product service components.

use catalog_config::DatabaseConfig;
use catalog_core::{module, CatalogResult};
use catalog_repository::{
    DatabasePool, DatabasePoolParameters, InMemoryProductRepository, InMemoryProductTypeRepository,
    MySqlProductRepository, MySqlProductTypeRepository,
};
use catalog_service::{CacheAdminComponent, CachingTypeResolver, ConcurrentMapCacheManager, ProductServiceComponent};
use std::sync::Arc;

module! {
    pub MySqlModule {
        components = [
            DatabasePool,
            MySqlProductTypeRepository,
            MySqlProductRepository,
            ConcurrentMapCacheManager,
            CachingTypeResolver,
            CacheAdminComponent,
            ProductServiceComponent,
        ],
        providers = [],
    }
}

module! {
    pub InMemoryModule {
        components = [
            InMemoryProductTypeRepository,
            InMemoryProductRepository,
            ConcurrentMapCacheManager,
            CachingTypeResolver,
            CacheAdminComponent,
            ProductServiceComponent,
        ],
        providers = [],
    }
}

/// Connects to MySQL and builds the module around the pool.
pub async fn build_mysql_module(db_config: &DatabaseConfig) -> CatalogResult<Arc<MySqlModule>> {
    let db_pool = DatabasePool::connect(db_config).await?;

    let module = MySqlModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool: db_pool.pool() })
        .build();

    Ok(Arc::new(module))
}

/// Builds a module over empty in-memory stores.
#[must_use]
pub fn build_in_memory_module() -> Arc<InMemoryModule> {
    Arc::new(InMemoryModule::builder().build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_repository::ProductTypeRepository;
    use catalog_service::{CacheManager, TypeResolver};
    use shaku::HasComponent;

    #[tokio::test]
    async fn test_in_memory_module_shares_one_cache_manager() {
        let module = build_in_memory_module();
        let store: Arc<dyn ProductTypeRepository> = module.resolve();
        catalog_repository::seed_default_types(store.as_ref()).await.unwrap();

        let resolver: Arc<dyn TypeResolver> = module.resolve();
        resolver.resolve("X1").await.unwrap();

        let manager: &dyn CacheManager = module.resolve_ref();
        assert_eq!(manager.cache(catalog_service::cache_keys::PRODUCT_TYPE_BY_CODE).len(), 1);
    }
}
