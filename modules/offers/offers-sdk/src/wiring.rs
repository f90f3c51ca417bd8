//! Wiring for Offers SDK

use std::sync::Arc;

use anyhow::Result;
use nftstore_transport_grpc::GrpcClientConfig;

use crate::SERVICE_NAME;
use crate::api::OffersClientV1;
use crate::client::OffersGrpcClient;

/// Build a lazily-connecting gRPC client for the Offers service.
///
/// # Errors
/// Returns an error if `uri` is not a valid endpoint URI.
pub fn wire_client(uri: &str, cfg: &GrpcClientConfig) -> Result<Arc<dyn OffersClientV1>> {
    let client = OffersGrpcClient::connect_lazy(uri, cfg)?;
    tracing::info!(service = SERVICE_NAME, uri, "OffersClientV1 client wired");
    Ok(Arc::new(client))
}
