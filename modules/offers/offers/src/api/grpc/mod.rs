pub mod server;
pub use server::OffersServiceImpl;
