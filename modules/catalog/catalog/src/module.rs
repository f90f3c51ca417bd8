//! Catalog module definition
//!
//! Builds the domain service from configuration and exposes it through
//! the gRPC server.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;

use catalog_sdk::{CatalogServer, SERVICE_NAME};
use nftstore_transport_grpc::GrpcServerConfig;

use crate::api::grpc::CatalogServiceImpl;
use crate::config::CatalogConfig;
use crate::domain::Service;

/// Catalog module.
pub struct CatalogModule {
    service: Arc<Service>,
    server: GrpcServerConfig,
}

impl CatalogModule {
    /// Seed the catalog and prepare the server from `cfg`.
    #[must_use]
    pub fn new(cfg: &CatalogConfig) -> Self {
        tracing::info!(
            injected_latency = ?cfg.injected_latency,
            "Initializing catalog module"
        );
        let service = Arc::new(Service::with_seed_catalog(cfg.injected_latency));
        tracing::info!(items = service.len(), "catalog module initialized");
        Self::from_service(service, cfg.server.clone())
    }

    #[must_use]
    pub fn from_service(service: Arc<Service>, server: GrpcServerConfig) -> Self {
        Self { service, server }
    }

    #[must_use]
    pub fn service(&self) -> Arc<Service> {
        Arc::clone(&self.service)
    }

    /// gRPC routes serving the catalog.
    #[must_use]
    pub fn routes(&self) -> Routes {
        Routes::new(CatalogServer::new(CatalogServiceImpl::new(self.service())))
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
