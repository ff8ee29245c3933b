//! # Catalog Repository
//!
//! Stores for products and product types.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductTypeRepository> / Arc<dyn ProductRepository>
//! MySqlProductTypeRepository        InMemoryProductTypeRepository
//! MySqlProductRepository            InMemoryProductRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```

pub mod health;
pub mod memory;
pub mod mysql;
pub mod pool;
pub mod seed;
pub mod traits;

pub use health::*;
pub use memory::*;
pub use mysql::*;
pub use pool::*;
pub use seed::*;
pub use traits::*;
