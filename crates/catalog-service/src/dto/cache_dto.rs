//! Cache administration DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One registered cache region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CacheRegionSummary {
    pub name: String,
    pub size: usize,
}
