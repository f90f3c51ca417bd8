pub mod service;

pub use service::{HomePage, ProductPage, Service, ServiceError};
