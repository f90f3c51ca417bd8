//! gRPC client implementation of `CatalogClientV1`

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use nftstore_transport_grpc::client::{GrpcClientConfig, connect_lazy, connect_with_stack};
use tonic::transport::Channel;
use tracing::{debug, instrument};

use crate::api::{CatalogClientV1, CatalogError};
use crate::models::{CatalogItem, CatalogQuery};
use crate::proto::CatalogRequest;
use crate::proto::catalog_client::CatalogClient;

/// gRPC client implementation of `CatalogClientV1`
///
/// Cloning the inner tonic client is cheap; every call works on its own
/// clone so the client can be shared across tasks.
#[derive(Clone)]
pub struct CatalogGrpcClient {
    inner: CatalogClient<Channel>,
    /// Sent as `grpc-timeout` so the server stops working once we stop waiting.
    rpc_timeout: Option<Duration>,
}

impl CatalogGrpcClient {
    /// Connect to the Catalog service eagerly.
    ///
    /// # Errors
    /// Returns an error if the URI is invalid or the service is unreachable.
    pub async fn connect(uri: impl Into<String>, cfg: &GrpcClientConfig) -> Result<Self> {
        let channel: Channel = connect_with_stack(uri, cfg).await?;
        Ok(Self::from_channel(channel).with_rpc_timeout(cfg.rpc_timeout))
    }

    /// Create a client whose channel connects on first call.
    ///
    /// # Errors
    /// Returns an error if the URI is invalid.
    pub fn connect_lazy(uri: impl Into<String>, cfg: &GrpcClientConfig) -> Result<Self> {
        let channel: Channel = connect_lazy(uri, cfg)?;
        Ok(Self::from_channel(channel).with_rpc_timeout(cfg.rpc_timeout))
    }

    #[must_use]
    pub fn from_channel(channel: Channel) -> Self {
        Self {
            inner: CatalogClient::new(channel),
            rpc_timeout: None,
        }
    }

    #[must_use]
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = Some(timeout);
        self
    }

    fn request<T>(&self, message: T) -> tonic::Request<T> {
        let mut request = tonic::Request::new(message);
        if let Some(timeout) = self.rpc_timeout {
            request.set_timeout(timeout);
        }
        request
    }
}

#[async_trait]
impl CatalogClientV1 for CatalogGrpcClient {
    #[instrument(skip(self), name = "catalog_client.catalog")]
    async fn catalog(&self, query: CatalogQuery) -> Result<Vec<CatalogItem>, CatalogError> {
        let mut client = self.inner.clone();

        let request = self.request(CatalogRequest::from(query));
        let response = client.catalog(request).await?;

        let items = response
            .into_inner()
            .items
            .into_iter()
            .map(CatalogItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        debug!(count = items.len(), "catalog response received");
        Ok(items)
    }
}
