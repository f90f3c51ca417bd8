//! gRPC API layer for the catalog service

pub mod server;

pub use server::CatalogServiceImpl;
