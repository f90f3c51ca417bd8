//! gRPC client transport configuration and connection utilities.
//!
//! Provides:
//! - Configurable connect and RPC timeouts
//! - HTTP/2 keepalive settings for connection health
//! - Eager and lazy channel construction
//!
//! There is deliberately no RPC retry here: a failed call surfaces to the
//! caller as-is.

use std::time::Duration;

use tonic::transport::{Channel, Endpoint};
use tracing::Instrument;

fn duration_to_i64_ms(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

/// Configuration for the gRPC client transport stack.
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    /// Timeout for establishing a connection.
    pub connect_timeout: Duration,

    /// Timeout for individual RPC calls. Sent to the server as `grpc-timeout`
    /// so it can abandon work the client no longer waits for.
    pub rpc_timeout: Duration,

    /// Service name for tracing.
    pub service_name: &'static str,

    /// Emit an info event once connected.
    pub enable_tracing: bool,
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            rpc_timeout: Duration::from_secs(10),
            service_name: "grpc_client",
            enable_tracing: true,
        }
    }
}

impl GrpcClientConfig {
    /// Create a new configuration with the given service name.
    #[must_use]
    pub fn new(service_name: &'static str) -> Self {
        Self {
            service_name,
            ..Self::default()
        }
    }

    /// Set the connect timeout.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the RPC timeout.
    #[must_use]
    pub fn with_rpc_timeout(mut self, timeout: Duration) -> Self {
        self.rpc_timeout = timeout;
        self
    }

    /// Disable tracing.
    #[must_use]
    pub fn without_tracing(mut self) -> Self {
        self.enable_tracing = false;
        self
    }
}

/// `http://host:port` URI for a plaintext gRPC endpoint.
#[must_use]
pub fn http_uri(host: &str, port: u16) -> String {
    if host.contains(':') && !host.starts_with('[') {
        format!("http://[{host}]:{port}")
    } else {
        format!("http://{host}:{port}")
    }
}

/// Whether `status` is this client's own RPC timeout firing.
///
/// tonic reports a local `TimeoutExpired` as `CANCELLED` carrying that error's
/// text. A `CANCELLED` sent by the server carries the server's message.
#[must_use]
pub fn is_local_timeout(status: &tonic::Status) -> bool {
    status.code() == tonic::Code::Cancelled
        && status.message() == tonic::TimeoutExpired(()).to_string()
}

/// Build a tonic `Endpoint` with timeouts and keepalive settings.
///
/// Configures:
/// - Connect timeout
/// - Per-RPC timeout
/// - TCP keepalive (30 seconds)
/// - HTTP/2 keepalive interval (30 seconds)
/// - Keepalive timeout (10 seconds)
fn build_endpoint(uri: String, cfg: &GrpcClientConfig) -> Result<Endpoint, tonic::transport::Error> {
    let endpoint = Endpoint::from_shared(uri)?
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.rpc_timeout)
        .tcp_keepalive(Some(Duration::from_secs(30)))
        .http2_keep_alive_interval(Duration::from_secs(30))
        .keep_alive_timeout(Duration::from_secs(10))
        .keep_alive_while_idle(true);

    Ok(endpoint)
}

/// Connect to a gRPC service eagerly.
///
/// Fails immediately if the service is unreachable within the connect
/// timeout.
///
/// # Errors
/// Returns an error if the URI is invalid or the connection fails.
pub async fn connect_with_stack<TClient>(
    uri: impl Into<String>,
    cfg: &GrpcClientConfig,
) -> anyhow::Result<TClient>
where
    TClient: From<Channel>,
{
    let uri_string = uri.into();
    let span = tracing::debug_span!(
        "grpc_connect",
        service = cfg.service_name,
        uri = %uri_string
    );

    async move {
        let endpoint = build_endpoint(uri_string, cfg)?;
        let channel = endpoint.connect().await?;

        if cfg.enable_tracing {
            tracing::info!(
                service_name = cfg.service_name,
                connect_timeout_ms = duration_to_i64_ms(cfg.connect_timeout),
                rpc_timeout_ms = duration_to_i64_ms(cfg.rpc_timeout),
                "gRPC client connected"
            );
        }

        Ok(TClient::from(channel))
    }
    .instrument(span)
    .await
}

/// Build a channel that connects on first use.
///
/// A gateway can therefore start before its backends; an unreachable backend
/// shows up as a failed call rather than a failed startup.
///
/// # Errors
/// Returns an error only if the URI is invalid.
pub fn connect_lazy<TClient>(uri: impl Into<String>, cfg: &GrpcClientConfig) -> anyhow::Result<TClient>
where
    TClient: From<Channel>,
{
    let uri_string = uri.into();
    let endpoint = build_endpoint(uri_string.clone(), cfg)?;

    if cfg.enable_tracing {
        tracing::info!(
            service_name = cfg.service_name,
            uri = %uri_string,
            rpc_timeout_ms = duration_to_i64_ms(cfg.rpc_timeout),
            "gRPC client configured (lazy connect)"
        );
    }

    Ok(TClient::from(endpoint.connect_lazy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = GrpcClientConfig::default();
        assert_eq!(cfg.connect_timeout, Duration::from_secs(5));
        assert_eq!(cfg.rpc_timeout, Duration::from_secs(10));
        assert!(cfg.enable_tracing);
    }

    #[test]
    fn test_config_builder() {
        let cfg = GrpcClientConfig::new("catalog")
            .with_connect_timeout(Duration::from_secs(1))
            .with_rpc_timeout(Duration::from_millis(300))
            .without_tracing();

        assert_eq!(cfg.service_name, "catalog");
        assert_eq!(cfg.connect_timeout, Duration::from_secs(1));
        assert_eq!(cfg.rpc_timeout, Duration::from_millis(300));
        assert!(!cfg.enable_tracing);
    }

    #[test]
    fn test_http_uri() {
        assert_eq!(http_uri("catalog", 50052), "http://catalog:50052");
        assert_eq!(http_uri("127.0.0.1", 50051), "http://127.0.0.1:50051");
        assert_eq!(http_uri("::1", 50051), "http://[::1]:50051");
    }

    #[test]
    fn test_local_timeout_detection() {
        let local = tonic::Status::from_error(Box::new(tonic::TimeoutExpired(())));
        assert_eq!(local.code(), tonic::Code::Cancelled);
        assert!(is_local_timeout(&local));

        assert!(!is_local_timeout(&tonic::Status::cancelled("server shutting down")));
        assert!(!is_local_timeout(&tonic::Status::deadline_exceeded("Timeout expired")));
    }

    #[test]
    fn test_build_endpoint_succeeds() {
        let cfg = GrpcClientConfig::default();
        let result = build_endpoint("http://localhost:50051".to_owned(), &cfg);
        assert!(result.is_ok(), "build_endpoint should succeed with valid URI");
    }

    #[test]
    fn test_build_endpoint_empty_uri() {
        let cfg = GrpcClientConfig::default();
        let result = build_endpoint(String::new(), &cfg);
        assert!(result.is_err(), "build_endpoint should fail with empty URI");
    }
}
