//! Cache administration component.

use crate::cache::CacheManager;
use crate::cache_admin::{CacheAdmin, CacheCommand};
use crate::dto::CacheRegionSummary;
use catalog_core::CatalogResult;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};

/// Executes operator commands against the cache registry.
#[derive(Component)]
#[shaku(interface = CacheAdmin)]
pub struct CacheAdminComponent {
    #[shaku(inject)]
    cache_manager: Arc<dyn CacheManager>,
}

impl CacheAdminComponent {
    pub fn new(cache_manager: Arc<dyn CacheManager>) -> Self {
        Self { cache_manager }
    }

    fn reset(&self) {
        let names = self.cache_manager.cache_names();
        for name in &names {
            if let Some(region) = self.cache_manager.get_cache(name) {
                region.clear();
            }
        }
        info!("Cache reset, cleared regions: {}", names.join(", "));
    }
}

impl CacheAdmin for CacheAdminComponent {
    fn handle_command(&self, command: &str) -> CatalogResult<&'static str> {
        let command: CacheCommand = command.parse().map_err(|e| {
            debug!("Ignoring unknown cache command: {}", command);
            e
        })?;

        match command {
            CacheCommand::Reset => self.reset(),
        }
        Ok(command.as_str())
    }

    fn regions(&self) -> Vec<CacheRegionSummary> {
        self.cache_manager
            .cache_names()
            .into_iter()
            .filter_map(|name| {
                self.cache_manager.get_cache(&name).map(|region| CacheRegionSummary {
                    size: region.len(),
                    name,
                })
            })
            .collect()
    }
}

impl std::fmt::Debug for CacheAdminComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAdminComponent").finish_non_exhaustive()
    }
}
