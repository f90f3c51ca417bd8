//! Catalog SDK
//!
//! This crate provides everything needed to consume the catalog service:
//! - Domain types (`CatalogItem`, `Price`, `CatalogQuery`)
//! - API trait (`CatalogClientV1`)
//! - Error types (`CatalogError`)
//! - Wiring function (`wire_client`)
//! - Proto stubs for the server implementation
//!
//! ## Usage
//!
//! ```ignore
//! use catalog_sdk::{CatalogQuery, wire_client};
//! use nftstore_transport_grpc::GrpcClientConfig;
//!
//! let catalog = wire_client("http://catalog:50052", &GrpcClientConfig::new("catalog"))?;
//! let items = catalog.catalog(CatalogQuery::sample(12)).await?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

// === API TRAIT AND TYPES ===
mod api;
mod models;
pub use api::{CatalogClientV1, CatalogError};
pub use models::{CatalogItem, CatalogQuery, Price, is_sample_sentinel};

// === WIRING ===
mod client;
mod wiring;
pub use client::CatalogGrpcClient;
pub use wiring::wire_client;

// === GRPC PROTO STUBS (for server implementation) ===
/// Generated protobuf types for the Catalog service
pub mod proto {
    tonic::include_proto!("nftstore.catalog.v1");
}

// Re-export proto types needed by server
pub use proto::catalog_server::{Catalog, CatalogServer};
pub use proto::{CatalogRequest, CatalogResponse};

/// Service name constant for the Catalog service
pub const SERVICE_NAME: &str = "nftstore.catalog.v1.Catalog";

/// Well-known port the catalog service listens on.
pub const DEFAULT_PORT: u16 = 50052;

/// Reserved `product_id` meaning "no specific id, return a sample".
pub const SAMPLE_PRODUCT_ID: &str = "dummy";
