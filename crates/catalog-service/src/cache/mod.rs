//! Caching infrastructure for the service layer.
//!
//! A [`CacheManager`] is a registry of independently named [`Cache`] regions.
//! Each region has its own lock, so traffic on one region never waits on another.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;

pub use cache_interface::{Cache, CacheExt, CacheManager, CacheValue, Lookup, PutOutcome};
pub use memory_cache::{ConcurrentMapCache, ConcurrentMapCacheManager};
