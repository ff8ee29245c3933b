//! Readiness check backed by the product type store.

use crate::ProductTypeRepository;
use async_trait::async_trait;
use catalog_core::{HealthCheck, HealthStatus};
use std::sync::Arc;

/// Reports the store as unhealthy when it cannot be reached.
pub struct StoreHealthCheck {
    repository: Arc<dyn ProductTypeRepository>,
}

impl StoreHealthCheck {
    #[must_use]
    pub fn new(repository: Arc<dyn ProductTypeRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl HealthCheck for StoreHealthCheck {
    fn name(&self) -> &str {
        "store"
    }

    async fn check(&self) -> HealthStatus {
        match self.repository.health_check().await {
            Ok(()) => HealthStatus::Healthy,
            Err(e) => HealthStatus::Unhealthy(e.to_string()),
        }
    }
}
