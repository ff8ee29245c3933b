//! Cache region and registry traits.

use async_trait::async_trait;
use catalog_core::{CatalogError, CatalogResult};
use shaku::Interface;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use tracing::debug;

/// A type-erased cached value.
pub type CacheValue = Arc<dyn Any + Send + Sync>;

/// Result of a region lookup.
pub enum Lookup {
    /// The key is cached.
    Hit(CacheValue),
    /// The key is absent. A value loaded now must be stored with this generation.
    Miss { generation: u64 },
}

/// Result of [`Cache::put_if_absent`].
pub enum PutOutcome {
    /// The value was stored.
    Stored,
    /// Another load stored a value first; that value is returned.
    Existing(CacheValue),
    /// The region was cleared since the lookup; nothing was stored.
    Stale,
}

/// A named, independently clearable mapping from key to value.
///
/// Every clear starts a new generation. A value read from the store before a
/// clear carries the old generation and is refused by `put_if_absent`, so no
/// pre-clear read can be re-inserted after the clear completes.
pub trait Cache: Send + Sync {
    /// Region name, unique within its manager.
    fn name(&self) -> &str;

    /// Looks up a key.
    fn lookup(&self, key: &str) -> Lookup;

    /// Stores a value unless the key is already present or the region was
    /// cleared after `generation` was observed.
    fn put_if_absent(&self, key: &str, value: CacheValue, generation: u64) -> PutOutcome;

    /// Removes every entry.
    fn clear(&self);

    /// Number of entries.
    fn len(&self) -> usize;

    /// Returns true when the region holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registry of cache regions.
pub trait CacheManager: Interface + Send + Sync {
    /// Returns the region with this name, creating it if needed.
    fn cache(&self, name: &str) -> Arc<dyn Cache>;

    /// Returns the region with this name if it exists.
    fn get_cache(&self, name: &str) -> Option<Arc<dyn Cache>>;

    /// Names of every registered region, sorted.
    fn cache_names(&self) -> Vec<String>;
}

/// Typed access on top of [`Cache`].
#[async_trait]
pub trait CacheExt: Cache {
    /// Returns the cached value for `key`, if present and of type `T`.
    fn get<T: Any + Send + Sync>(&self, key: &str) -> Option<Arc<T>> {
        match self.lookup(key) {
            Lookup::Hit(value) => value.downcast::<T>().ok(),
            Lookup::Miss { .. } => None,
        }
    }

    /// Returns the cached value, or runs `loader` and caches its result.
    ///
    /// Loader failures are returned as-is and never cached. When two loads
    /// race for the same key the first stored value wins and both callers
    /// receive it.
    async fn get_or_try_load<T, F, Fut>(&self, key: &str, loader: F) -> CatalogResult<Arc<T>>
    where
        T: Any + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = CatalogResult<T>> + Send,
    {
        let generation = match self.lookup(key) {
            Lookup::Hit(value) => {
                debug!("Cache hit in {} for {}", self.name(), key);
                return downcast(self.name(), key, value);
            }
            Lookup::Miss { generation } => generation,
        };

        let loaded: CacheValue = Arc::new(loader().await?);

        match self.put_if_absent(key, Arc::clone(&loaded), generation) {
            PutOutcome::Stored => downcast(self.name(), key, loaded),
            PutOutcome::Existing(existing) => downcast(self.name(), key, existing),
            PutOutcome::Stale => {
                debug!("Region {} cleared during load of {}, not caching", self.name(), key);
                downcast(self.name(), key, loaded)
            }
        }
    }
}

impl<C: Cache + ?Sized> CacheExt for C {}

fn downcast<T: Any + Send + Sync>(region: &str, key: &str, value: CacheValue) -> CatalogResult<Arc<T>> {
    value.downcast::<T>().map_err(|_| {
        CatalogError::Cache(format!(
            "Entry {} in region {} holds an unexpected type",
            key, region
        ))
    })
}
