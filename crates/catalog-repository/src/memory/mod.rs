//! Process-local store implementations.
//!
//! Used by the `memory` storage backend and by tests.

mod product_repository;
mod product_type_repository;

pub use product_repository::*;
pub use product_type_repository::*;
