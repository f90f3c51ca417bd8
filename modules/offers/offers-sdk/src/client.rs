//! gRPC client implementation of `OffersClientV1`

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use nftstore_transport_grpc::client::{GrpcClientConfig, connect_lazy, connect_with_stack};
use tonic::transport::Channel;
use tracing::{debug, instrument};

use crate::api::{OffersClientV1, OffersError};
use crate::models::NftOffer;
use crate::proto::OfferRequest;
use crate::proto::offers_client::OffersClient;

/// gRPC client implementation of `OffersClientV1`
#[derive(Clone)]
pub struct OffersGrpcClient {
    inner: OffersClient<Channel>,
    /// Sent as `grpc-timeout` so the server stops working once we stop waiting.
    rpc_timeout: Option<Duration>,
}

impl OffersGrpcClient {
    /// Connect to the Offers service eagerly.
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
            inner: OffersClient::new(channel),
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
impl OffersClientV1 for OffersGrpcClient {
    #[instrument(skip(self), name = "offers_client.offer")]
    async fn offer(&self, max_results: u32) -> Result<Vec<NftOffer>, OffersError> {
        let mut client = self.inner.clone();

        let response = client
            .offer(self.request(OfferRequest { max_results }))
            .await?;

        let offers = response
            .into_inner()
            .offers
            .into_iter()
            .map(NftOffer::from)
            .collect::<Vec<_>>();

        debug!(count = offers.len(), "offers response received");
        Ok(offers)
    }
}
