//! Offers SDK
//!
//! Client side of the offers service: the `OffersClientV1` trait, the
//! `NftOffer` type, a gRPC client and `wire_client`. The proto stubs are
//! exported for the server implementation.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod models;
pub use api::{OffersClientV1, OffersError};
pub use models::NftOffer;

mod client;
mod wiring;
pub use client::OffersGrpcClient;
pub use wiring::wire_client;

/// Generated protobuf types for the Offers service
pub mod proto {
    tonic::include_proto!("nftstore.offers.v1");
}

pub use proto::offers_server::{Offers, OffersServer};
pub use proto::{OfferRequest, OfferResponse};

/// Service name constant for the Offers service
pub const SERVICE_NAME: &str = "nftstore.offers.v1.Offers";

/// Well-known port the offers service listens on.
pub const DEFAULT_PORT: u16 = 50051;
