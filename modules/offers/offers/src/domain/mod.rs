pub mod seed;
pub mod service;

pub use seed::active_offers;
pub use service::Service;
