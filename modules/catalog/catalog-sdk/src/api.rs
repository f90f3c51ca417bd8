//! Catalog API trait and types
//!
//! Contract trait and error type for the catalog service.

use async_trait::async_trait;
use nftstore_transport_grpc::client::is_local_timeout;

use crate::models::{CatalogItem, CatalogQuery};

/// Catalog API trait
///
/// An empty result is not an error: it means the requested id is unknown
/// (or a sample of zero was asked for). Only transport failures and
/// malformed responses are reported as [`CatalogError`].
#[async_trait]
pub trait CatalogClientV1: Send + Sync {
    /// Sample the catalog or look up a single product.
    async fn catalog(&self, query: CatalogQuery) -> Result<Vec<CatalogItem>, CatalogError>;
}

/// Error type for Catalog operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The service could not be reached.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    /// The call did not complete before its deadline.
    #[error("catalog deadline exceeded: {0}")]
    DeadlineExceeded(String),

    /// The service answered with a non-OK status.
    #[error("catalog returned {code}: {message}")]
    Remote { code: String, message: String },

    /// A response item violated the contract.
    #[error("invalid catalog data: {0}")]
    InvalidData(String),
}

impl From<tonic::Status> for CatalogError {
    fn from(status: tonic::Status) -> Self {
        match status.code() {
            tonic::Code::Unavailable => Self::Unavailable(status.message().to_owned()),
            tonic::Code::DeadlineExceeded => Self::DeadlineExceeded(status.message().to_owned()),
            tonic::Code::Cancelled if is_local_timeout(&status) => {
                Self::DeadlineExceeded(status.message().to_owned())
            }
            code => Self::Remote {
                code: format!("{code:?}"),
                message: status.message().to_owned(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        let err = CatalogError::from(tonic::Status::unavailable("connection refused"));
        assert_eq!(err, CatalogError::Unavailable("connection refused".to_owned()));

        let err = CatalogError::from(tonic::Status::deadline_exceeded("too slow"));
        assert!(matches!(err, CatalogError::DeadlineExceeded(_)));

        let err = CatalogError::from(tonic::Status::internal("boom"));
        assert_eq!(
            err,
            CatalogError::Remote {
                code: "Internal".to_owned(),
                message: "boom".to_owned()
            }
        );
    }

    #[test]
    fn only_a_local_timeout_counts_as_deadline() {
        let local = tonic::Status::from_error(Box::new(tonic::TimeoutExpired(())));
        assert!(matches!(
            CatalogError::from(local),
            CatalogError::DeadlineExceeded(_)
        ));

        let err = CatalogError::from(tonic::Status::cancelled("server shutting down"));
        assert_eq!(
            err,
            CatalogError::Remote {
                code: "Cancelled".to_owned(),
                message: "server shutting down".to_owned()
            }
        );
    }
}
