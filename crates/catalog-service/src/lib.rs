//! # Catalog Service
//!
//! Product type resolution through named cache regions, the boundary codec
//! for product type references, cache administration, and product CRUD.

pub mod cache;
pub mod cache_admin;
pub mod dto;
pub mod product_service;
pub mod reference_codec;
pub mod type_resolver;
pub mod r#impl;

pub use cache::*;
pub use cache_admin::*;
pub use dto::*;
pub use product_service::*;
pub use reference_codec::*;
pub use type_resolver::*;
pub use r#impl::{CacheAdminComponent, CachingTypeResolver, ProductServiceComponent};
