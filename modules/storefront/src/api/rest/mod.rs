pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;

pub use error::PageError;
pub use routes::router;
