//! # Catalog Server Library
//!
//! Dependency injection modules, application wiring, and startup
//! utilities for the product catalog server.

pub mod app;
pub mod di;
pub mod startup;
