//! Custom Axum extractors.

mod binding;

pub use binding::*;
