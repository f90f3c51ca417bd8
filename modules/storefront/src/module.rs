//! Storefront module definition
//!
//! Wires the downstream clients, builds the router and serves HTTP.

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::api::rest;
use crate::config::StorefrontConfig;
use crate::domain::Service;

/// Storefront module.
pub struct StorefrontModule {
    service: Arc<Service>,
}

impl StorefrontModule {
    /// Wire lazily-connecting catalog and offers clients from `cfg`.
    ///
    /// Nothing is dialed here; an unreachable service surfaces on the first
    /// page request.
    ///
    /// # Errors
    /// Returns an error if an upstream URI is malformed.
    pub fn new(cfg: &StorefrontConfig) -> Result<Self> {
        let catalog = catalog_sdk::wire_client(
            &cfg.catalog.uri(),
            &cfg.catalog.client_config(catalog_sdk::SERVICE_NAME),
        )?;
        let offers = offers_sdk::wire_client(
            &cfg.offers.uri(),
            &cfg.offers.client_config(offers_sdk::SERVICE_NAME),
        )?;

        Ok(Self::from_service(Arc::new(Service::new(
            catalog,
            offers,
            cfg.homepage_items,
            cfg.server.request_timeout,
        ))))
    }

    #[must_use]
    pub fn from_service(service: Arc<Service>) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn router(&self) -> Router {
        rest::router(Arc::clone(&self.service))
    }

    /// Serve HTTP on `listener` until `cancel` fires.
    ///
    /// # Errors
    /// Returns an error if the server fails.
    pub async fn run(&self, listener: TcpListener, cancel: CancellationToken) -> Result<()> {
        tracing::info!(addr = %listener.local_addr()?, "HTTP server listening");

        let shutdown = async move {
            cancel.cancelled().await;
            tracing::info!("HTTP server shutting down gracefully (cancellation)");
        };

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
