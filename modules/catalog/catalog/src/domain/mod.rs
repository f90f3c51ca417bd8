//! Domain layer for the catalog service
//!
//! Contains the seed catalog and the query logic over it.

pub mod seed;
pub mod service;

pub use seed::seed_catalog;
pub use service::Service;
