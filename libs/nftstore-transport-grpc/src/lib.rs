#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Transport plumbing shared by the nftstore gRPC services.
//!
//! - [`client`] builds tonic endpoints with timeouts and keepalive.
//! - [`server`] binds a listener and serves tonic routes until cancelled.

pub mod client;
pub mod server;

pub use client::{GrpcClientConfig, connect_lazy, connect_with_stack, http_uri, is_local_timeout};
pub use server::{GrpcServerConfig, bind, serve};
