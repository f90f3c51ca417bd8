//! Offers Service
//!
//! Serves random promotional offers from a fixed in-memory list over gRPC.

mod module;
pub use module::OffersModule;

pub mod config;
pub use config::OffersConfig;

#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
