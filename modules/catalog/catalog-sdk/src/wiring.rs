//! Wiring for Catalog SDK
//!
//! Provides `wire_client` to build the client a consumer holds on to.

use std::sync::Arc;

use anyhow::Result;
use nftstore_transport_grpc::GrpcClientConfig;

use crate::SERVICE_NAME;
use crate::api::CatalogClientV1;
use crate::client::CatalogGrpcClient;

/// Build a lazily-connecting gRPC client for the Catalog service.
///
/// Startup does not wait for the service; the first call connects.
///
/// # Errors
/// Returns an error if `uri` is not a valid endpoint URI.
///
/// # Example
/// ```ignore
/// let catalog = catalog_sdk::wire_client("http://catalog:50052", &cfg)?;
/// let items = catalog.catalog(CatalogQuery::sample(12)).await?;
/// ```
pub fn wire_client(uri: &str, cfg: &GrpcClientConfig) -> Result<Arc<dyn CatalogClientV1>> {
    let client = CatalogGrpcClient::connect_lazy(uri, cfg)?;
    tracing::info!(service = SERVICE_NAME, uri, "CatalogClientV1 client wired");
    Ok(Arc::new(client))
}
