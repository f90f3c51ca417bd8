//! Storefront Gateway
//!
//! HTTP front end of the NFT store. Every page is composed from one catalog
//! call and one offers call, issued concurrently over gRPC.
//!
//! ## Architecture
//!
//! - `domain/service.rs` - Fan-out to both services and page assembly
//! - `api/rest/` - Routes, handlers, HTML rendering and error pages
//! - `module.rs` - Client wiring and the HTTP server

mod module;
pub use module::StorefrontModule;

pub mod config;
pub use config::StorefrontConfig;

pub mod api;
pub mod domain;
