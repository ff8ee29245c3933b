//! Service implementations.
//!
//! Concrete components for the traits defined in the parent module. Each
//! derives `shaku::Component` for the server modules and has a plain `new`
//! constructor for direct wiring.

pub mod cache_admin_impl;
pub mod product_service_impl;
pub mod type_resolver_impl;

pub use cache_admin_impl::CacheAdminComponent;
pub use product_service_impl::ProductServiceComponent;
pub use type_resolver_impl::CachingTypeResolver;
