//! Cache-backed type resolver.

use crate::cache::{cache_keys, CacheExt, CacheManager};
use crate::type_resolver::{TypeResolver, PRODUCT_TYPE_RESOURCE};
use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult, ProductType};
use catalog_repository::ProductTypeRepository;
use shaku::Component;
use std::sync::Arc;
use tracing::info;

/// Resolves product types through the `product_type_by_code` and
/// `product_types` regions, reading the store on a miss.
#[derive(Component)]
#[shaku(interface = TypeResolver)]
pub struct CachingTypeResolver {
    #[shaku(inject)]
    repository: Arc<dyn ProductTypeRepository>,
    #[shaku(inject)]
    cache_manager: Arc<dyn CacheManager>,
}

impl CachingTypeResolver {
    pub fn new(repository: Arc<dyn ProductTypeRepository>, cache_manager: Arc<dyn CacheManager>) -> Self {
        Self {
            repository,
            cache_manager,
        }
    }
}

#[async_trait]
impl TypeResolver for CachingTypeResolver {
    async fn list_types(&self) -> CatalogResult<Vec<ProductType>> {
        let region = self.cache_manager.cache(cache_keys::PRODUCT_TYPES);
        let repository = Arc::clone(&self.repository);

        let types = region
            .get_or_try_load(cache_keys::ALL_PRODUCT_TYPES, move || async move {
                info!("Loading all product types");
                repository.find_all().await
            })
            .await?;

        Ok(types.as_ref().clone())
    }

    async fn resolve(&self, code: &str) -> CatalogResult<ProductType> {
        let region = self.cache_manager.cache(cache_keys::PRODUCT_TYPE_BY_CODE);
        let repository = Arc::clone(&self.repository);
        let key = code.to_string();

        let product_type = region
            .get_or_try_load(code, move || async move {
                info!("Looking up product type {}", key);
                repository
                    .find_by_code(&key)
                    .await?
                    .ok_or_else(|| CatalogError::not_found(PRODUCT_TYPE_RESOURCE, &key))
            })
            .await?;

        Ok(product_type.as_ref().clone())
    }
}

impl std::fmt::Debug for CachingTypeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachingTypeResolver").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ConcurrentMapCacheManager;
    use crate::cache_admin::CacheAdmin;
    use crate::r#impl::CacheAdminComponent;
    use catalog_core::{NewProductType, ProductTypeId};
    use catalog_repository::InMemoryProductTypeRepository;
    use mockall::mock;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{Notify, Semaphore};

    /// Counts store reads on top of the in-memory store.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryProductTypeRepository,
        lookups: AtomicUsize,
        listings: AtomicUsize,
    }

    impl CountingStore {
        fn seeded() -> Self {
            Self {
                inner: InMemoryProductTypeRepository::with_default_types(),
                ..Self::default()
            }
        }

        fn lookups(&self) -> usize {
            self.lookups.load(Ordering::SeqCst)
        }

        fn listings(&self) -> usize {
            self.listings.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ProductTypeRepository for CountingStore {
        async fn find_by_code(&self, code: &str) -> CatalogResult<Option<ProductType>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.find_by_code(code).await
        }

        async fn find_all(&self) -> CatalogResult<Vec<ProductType>> {
            self.listings.fetch_add(1, Ordering::SeqCst);
            self.inner.find_all().await
        }

        async fn create(&self, product_type: &NewProductType) -> CatalogResult<ProductType> {
            self.inner.create(product_type).await
        }
    }

    /// Holds every lookup until a permit is released, so tests can
    /// interleave other work with an in-flight store read.
    struct GatedStore {
        inner: InMemoryProductTypeRepository,
        entered: Notify,
        gate: Semaphore,
        lookups: AtomicUsize,
    }

    impl GatedStore {
        fn seeded() -> Self {
            Self {
                inner: InMemoryProductTypeRepository::with_default_types(),
                entered: Notify::new(),
                gate: Semaphore::new(0),
                lookups: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProductTypeRepository for GatedStore {
        async fn find_by_code(&self, code: &str) -> CatalogResult<Option<ProductType>> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            let found = self.inner.find_by_code(code).await;
            self.entered.notify_one();
            self.gate
                .acquire()
                .await
                .map_err(|e| CatalogError::internal(e.to_string()))?
                .forget();
            found
        }

        async fn find_all(&self) -> CatalogResult<Vec<ProductType>> {
            self.inner.find_all().await
        }

        async fn create(&self, product_type: &NewProductType) -> CatalogResult<ProductType> {
            self.inner.create(product_type).await
        }
    }

    mock! {
        TypeStore {}

        #[async_trait]
        impl ProductTypeRepository for TypeStore {
            async fn find_by_code(&self, code: &str) -> CatalogResult<Option<ProductType>>;
            async fn find_all(&self) -> CatalogResult<Vec<ProductType>>;
            async fn create(&self, product_type: &NewProductType) -> CatalogResult<ProductType>;
        }
    }

    fn resolver_over(store: Arc<dyn ProductTypeRepository>) -> (CachingTypeResolver, Arc<ConcurrentMapCacheManager>) {
        let manager = Arc::new(ConcurrentMapCacheManager::new());
        let resolver = CachingTypeResolver::new(store, Arc::clone(&manager) as Arc<dyn CacheManager>);
        (resolver, manager)
    }

    #[tokio::test]
    async fn test_resolve_hits_store_once() {
        let mut store = MockTypeStore::new();
        store
            .expect_find_by_code()
            .withf(|code| code == "X1")
            .times(1)
            .returning(|_| Ok(Some(ProductType::new(ProductTypeId(1), "X1", None))));

        let (resolver, _) = resolver_over(Arc::new(store));
        for _ in 0..3 {
            assert_eq!(resolver.resolve("X1").await.unwrap().code, "X1");
        }
    }

    #[tokio::test]
    async fn test_unknown_code_is_not_found_and_not_cached() {
        let store = Arc::new(CountingStore::seeded());
        let (resolver, manager) = resolver_over(Arc::clone(&store) as Arc<dyn ProductTypeRepository>);

        for _ in 0..2 {
            let err = resolver.resolve("NO_SUCH_CODE").await.unwrap_err();
            assert!(err.is_not_found_for(PRODUCT_TYPE_RESOURCE));
        }
        assert_eq!(store.lookups(), 2);
        assert!(manager.cache(cache_keys::PRODUCT_TYPE_BY_CODE).is_empty());
    }

    #[tokio::test]
    async fn test_codes_are_case_sensitive() {
        let store = Arc::new(CountingStore::seeded());
        let (resolver, _) = resolver_over(store);
        assert!(resolver.resolve("x1").await.is_err());
        assert!(resolver.resolve("X1").await.is_ok());
    }

    #[tokio::test]
    async fn test_list_types_cached_under_one_key() {
        let store = Arc::new(CountingStore::seeded());
        let (resolver, manager) = resolver_over(Arc::clone(&store) as Arc<dyn ProductTypeRepository>);

        let first = resolver.list_types().await.unwrap();
        let second = resolver.list_types().await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
        assert_eq!(store.listings(), 1);
        assert_eq!(manager.cache(cache_keys::PRODUCT_TYPES).len(), 1);
    }

    #[tokio::test]
    async fn test_reset_forces_store_reads() {
        let store = Arc::new(CountingStore::seeded());
        let (resolver, manager) = resolver_over(Arc::clone(&store) as Arc<dyn ProductTypeRepository>);
        let admin = CacheAdminComponent::new(Arc::clone(&manager) as Arc<dyn CacheManager>);

        resolver.resolve("R3").await.unwrap();
        resolver.list_types().await.unwrap();
        resolver.resolve("R3").await.unwrap();
        resolver.list_types().await.unwrap();
        assert_eq!((store.lookups(), store.listings()), (1, 1));

        assert_eq!(admin.handle_command("RESET").unwrap(), "RESET");

        resolver.resolve("R3").await.unwrap();
        resolver.list_types().await.unwrap();
        assert_eq!((store.lookups(), store.listings()), (2, 2));
    }

    #[tokio::test]
    async fn test_reset_during_population_leaves_no_stale_entry() {
        let store = Arc::new(GatedStore::seeded());
        let (resolver, manager) = resolver_over(Arc::clone(&store) as Arc<dyn ProductTypeRepository>);
        let resolver = Arc::new(resolver);
        let admin = CacheAdminComponent::new(Arc::clone(&manager) as Arc<dyn CacheManager>);

        let in_flight = {
            let resolver = Arc::clone(&resolver);
            tokio::spawn(async move { resolver.resolve("X1").await })
        };

        store.entered.notified().await;
        admin.handle_command("RESET").unwrap();
        store.gate.add_permits(1);

        assert_eq!(in_flight.await.unwrap().unwrap().code, "X1");
        assert!(manager.cache(cache_keys::PRODUCT_TYPE_BY_CODE).is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_misses_agree_on_one_value() {
        let store = Arc::new(GatedStore::seeded());
        let (resolver, manager) = resolver_over(Arc::clone(&store) as Arc<dyn ProductTypeRepository>);
        let resolver = Arc::new(resolver);

        let tasks: Vec<_> = (0..2)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                tokio::spawn(async move { resolver.resolve("R4").await })
            })
            .collect();

        store.gate.add_permits(2);
        let mut resolved = Vec::new();
        for task in tasks {
            resolved.push(task.await.unwrap().unwrap());
        }

        assert_eq!(resolved[0], resolved[1]);
        assert_eq!(manager.cache(cache_keys::PRODUCT_TYPE_BY_CODE).len(), 1);
        assert!(store.lookups.load(Ordering::SeqCst) >= 1);
    }

    #[tokio::test]
    async fn test_type_created_after_miss_resolves() {
        let store = Arc::new(CountingStore::seeded());
        let (resolver, _) = resolver_over(Arc::clone(&store) as Arc<dyn ProductTypeRepository>);

        assert!(resolver.resolve("N7").await.is_err());
        store.create(&NewProductType::new("N7", "New")).await.unwrap();
        assert_eq!(resolver.resolve("N7").await.unwrap().code, "N7");
    }
}
