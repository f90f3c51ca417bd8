//! Offers module definition

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;

use nftstore_transport_grpc::GrpcServerConfig;
use offers_sdk::{OffersServer, SERVICE_NAME};

use crate::api::grpc::OffersServiceImpl;
use crate::config::OffersConfig;
use crate::domain::Service;

/// Offers module.
pub struct OffersModule {
    service: Arc<Service>,
    server: GrpcServerConfig,
}

impl OffersModule {
    #[must_use]
    pub fn new(cfg: &OffersConfig) -> Self {
        let service = Arc::new(Service::with_active_offers());
        tracing::info!(offers = service.len(), "offers module initialized");
        Self::from_service(service, cfg.server.clone())
    }

    #[must_use]
    pub fn from_service(service: Arc<Service>, server: GrpcServerConfig) -> Self {
        Self { service, server }
    }

    #[must_use]
    pub fn routes(&self) -> Routes {
        Routes::new(OffersServer::new(OffersServiceImpl::new(Arc::clone(
            &self.service,
        ))))
    }

    /// Serve on `listener` until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if the gRPC server fails.
    pub async fn run(&self, listener: TcpListener, cancel: CancellationToken) -> Result<()> {
        nftstore_transport_grpc::serve(listener, self.routes(), &self.server, SERVICE_NAME, cancel)
            .await
    }
}
