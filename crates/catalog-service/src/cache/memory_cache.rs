//! Process-local cache regions backed by concurrent maps.

use super::cache_interface::{Cache, CacheManager, CacheValue, Lookup, PutOutcome};
use parking_lot::RwLock;
use shaku::Component;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[derive(Default)]
struct RegionState {
    generation: u64,
    entries: HashMap<String, CacheValue>,
}

/// One cache region guarded by its own lock.
pub struct ConcurrentMapCache {
    name: String,
    state: RwLock<RegionState>,
}

impl ConcurrentMapCache {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: RwLock::new(RegionState::default()),
        }
    }
}

impl Cache for ConcurrentMapCache {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookup(&self, key: &str) -> Lookup {
        let state = self.state.read();
        match state.entries.get(key) {
            Some(value) => Lookup::Hit(Arc::clone(value)),
            None => Lookup::Miss {
                generation: state.generation,
            },
        }
    }

    fn put_if_absent(&self, key: &str, value: CacheValue, generation: u64) -> PutOutcome {
        let mut state = self.state.write();
        if state.generation != generation {
            return PutOutcome::Stale;
        }
        if let Some(existing) = state.entries.get(key) {
            return PutOutcome::Existing(Arc::clone(existing));
        }
        state.entries.insert(key.to_string(), value);
        PutOutcome::Stored
    }

    fn clear(&self) {
        let mut state = self.state.write();
        state.entries.clear();
        state.generation = state.generation.wrapping_add(1);
    }

    fn len(&self) -> usize {
        self.state.read().entries.len()
    }
}

impl std::fmt::Debug for ConcurrentMapCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConcurrentMapCache")
            .field("name", &self.name)
            .field("len", &self.len())
            .finish()
    }
}

/// Registry creating [`ConcurrentMapCache`] regions on first use.
///
/// The registry lock is only taken to create or enumerate regions.
#[derive(Component, Default)]
#[shaku(interface = CacheManager)]
pub struct ConcurrentMapCacheManager {
    #[shaku(default)]
    caches: RwLock<BTreeMap<String, Arc<ConcurrentMapCache>>>,
}

impl ConcurrentMapCacheManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a manager with the given regions already registered.
    #[must_use]
    pub fn with_regions<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let manager = Self::new();
        for name in names {
            manager.cache(&name.into());
        }
        manager
    }
}

impl CacheManager for ConcurrentMapCacheManager {
    fn cache(&self, name: &str) -> Arc<dyn Cache> {
        if let Some(existing) = self.caches.read().get(name) {
            return Arc::clone(existing) as Arc<dyn Cache>;
        }
        let mut caches = self.caches.write();
        let region = caches
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(ConcurrentMapCache::new(name)));
        Arc::clone(region) as Arc<dyn Cache>
    }

    fn get_cache(&self, name: &str) -> Option<Arc<dyn Cache>> {
        self.caches
            .read()
            .get(name)
            .map(|region| Arc::clone(region) as Arc<dyn Cache>)
    }

    fn cache_names(&self) -> Vec<String> {
        self.caches.read().keys().cloned().collect()
    }
}
