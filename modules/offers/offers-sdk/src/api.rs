//! Offers API trait and error type.

use async_trait::async_trait;
use nftstore_transport_grpc::client::is_local_timeout;

use crate::models::NftOffer;

/// Offers API trait
#[async_trait]
pub trait OffersClientV1: Send + Sync {
    /// Up to `max_results` distinct offers in random order.
    async fn offer(&self, max_results: u32) -> Result<Vec<NftOffer>, OffersError>;
}

/// Error type for Offers operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum OffersError {
    #[error("offers unavailable: {0}")]
    Unavailable(String),

    #[error("offers deadline exceeded: {0}")]
    DeadlineExceeded(String),

    #[error("offers returned {code}: {message}")]
    Remote { code: String, message: String },
}

impl From<tonic::Status> for OffersError {
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
    fn local_timeout_counts_as_deadline() {
        let err = OffersError::from(tonic::Status::from_error(Box::new(tonic::TimeoutExpired(()))));
        assert_eq!(err, OffersError::DeadlineExceeded("Timeout expired".to_owned()));
    }

    #[test]
    fn server_cancel_is_remote() {
        let err = OffersError::from(tonic::Status::cancelled("server shutting down"));
        assert!(matches!(err, OffersError::Remote { ref code, .. } if code == "Cancelled"));
    }

    #[test]
    fn other_codes_are_remote() {
        let err = OffersError::from(tonic::Status::permission_denied("no"));
        assert!(matches!(err, OffersError::Remote { ref code, .. } if code == "PermissionDenied"));
    }
}
