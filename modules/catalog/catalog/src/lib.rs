//! Catalog Service
//!
//! Serves product metadata from a fixed in-memory catalog over gRPC.
//!
//! ## Architecture
//!
//! - `domain/seed.rs` - The product list loaded at startup
//! - `domain/service.rs` - Sampling and lookup logic
//! - `api/grpc/server.rs` - gRPC server implementation
//! - `module.rs` - Wiring from config to a running server
//!
//! External consumers should use the `catalog-sdk` crate which provides
//! the gRPC client and `wire_client()`.

// === MODULE DEFINITION ===
mod module;
pub use module::CatalogModule;

pub mod config;
pub use config::CatalogConfig;

// === INTERNAL MODULES ===
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
