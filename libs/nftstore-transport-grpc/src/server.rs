//! gRPC server bootstrap.
//!
//! A service binary binds its listener with [`bind`], then hands the listener
//! and its tonic routes to [`serve`], which runs until the cancellation token
//! fires and in-flight calls have drained.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tokio_util::sync::CancellationToken;
use tonic::service::Routes;
use tonic::transport::Server;

/// Listener and worker-pool settings for a gRPC service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GrpcServerConfig {
    pub bind_addr: SocketAddr,

    /// Runtime worker threads serving requests.
    pub workers: usize,

    /// In-flight requests allowed per client connection.
    pub max_concurrent_requests: usize,

    /// Upper bound for any single call. A shorter `grpc-timeout` sent by the
    /// client takes precedence.
    #[serde(with = "nftstore_utils::humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for GrpcServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 50051)),
            workers: 10,
            max_concurrent_requests: 10,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl GrpcServerConfig {
    /// Defaults listening on all interfaces at `port`.
    #[must_use]
    pub fn on_port(port: u16) -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            ..Self::default()
        }
    }

    /// # Errors
    /// Fails if the worker pool or concurrency limit is zero or the request
    /// timeout is zero.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.workers == 0 {
            anyhow::bail!("workers must be at least 1");
        }
        if self.max_concurrent_requests == 0 {
            anyhow::bail!("max_concurrent_requests must be at least 1");
        }
        if self.request_timeout.is_zero() {
            anyhow::bail!("request_timeout must be positive");
        }
        Ok(())
    }
}

/// Bind the TCP listener for a gRPC service.
///
/// # Errors
/// Returns an error if the address cannot be bound.
pub async fn bind(addr: SocketAddr) -> anyhow::Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind gRPC listener on {addr}: {e}"))
}

/// Serve `routes` on `listener` until `cancel` fires.
///
/// # Errors
/// Returns an error if the server fails while running.
pub async fn serve(
    listener: TcpListener,
    routes: Routes,
    cfg: &GrpcServerConfig,
    service_name: &'static str,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let bound_addr = listener.local_addr()?;
    tracing::info!(
        %bound_addr,
        service = service_name,
        workers = cfg.workers,
        max_concurrent_requests = cfg.max_concurrent_requests,
        transport = "tcp",
        "gRPC server listening"
    );

    let incoming = TcpListenerStream::new(listener);
    Server::builder()
        .concurrency_limit_per_connection(cfg.max_concurrent_requests)
        .timeout(cfg.request_timeout)
        .add_routes(routes)
        .serve_with_incoming_shutdown(incoming, async move {
            cancel.cancelled().await;
            tracing::info!(service = service_name, "gRPC server shutting down");
        })
        .await
        .map_err(|e| anyhow::anyhow!("gRPC server error: {e}"))
}
