//! Storefront configuration.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::Path;
use std::time::Duration;

use nftstore_bootstrap::{ConfigError, LoggingConfig, legacy_var, load_layered};
use nftstore_transport_grpc::{GrpcClientConfig, http_uri};
use serde::{Deserialize, Serialize};

/// Legacy variable naming the catalog host.
pub const CATALOG_HOST_VAR: &str = "CATALOG_HOST";
/// Legacy variable naming the offers host.
pub const OFFERS_HOST_VAR: &str = "OFFERS_HOST";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpServerConfig {
    pub bind_addr: SocketAddr,

    /// Budget for the downstream fan-out of one page.
    #[serde(with = "nftstore_utils::humantime_serde")]
    pub request_timeout: Duration,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, 8080)),
            request_timeout: Duration::from_secs(15),
        }
    }
}

/// Where and how to reach one downstream gRPC service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpstreamConfig {
    pub host: String,
    pub port: u16,
    #[serde(with = "nftstore_utils::humantime_serde")]
    pub connect_timeout: Duration,
    #[serde(with = "nftstore_utils::humantime_serde")]
    pub rpc_timeout: Duration,
}

impl UpstreamConfig {
    #[must_use]
    pub fn localhost(port: u16) -> Self {
        Self {
            host: "localhost".to_owned(),
            port,
            connect_timeout: Duration::from_secs(5),
            rpc_timeout: Duration::from_secs(10),
        }
    }

    #[must_use]
    pub fn uri(&self) -> String {
        http_uri(&self.host, self.port)
    }

    #[must_use]
    pub fn client_config(&self, service_name: &'static str) -> GrpcClientConfig {
        GrpcClientConfig::new(service_name)
            .with_connect_timeout(self.connect_timeout)
            .with_rpc_timeout(self.rpc_timeout)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorefrontConfig {
    pub server: HttpServerConfig,
    pub catalog: UpstreamConfig,
    pub offers: UpstreamConfig,

    /// Catalog items sampled for the homepage.
    pub homepage_items: u32,

    pub logging: LoggingConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            catalog: UpstreamConfig::localhost(catalog_sdk::DEFAULT_PORT),
            offers: UpstreamConfig::localhost(offers_sdk::DEFAULT_PORT),
            homepage_items: 12,
            logging: LoggingConfig::default(),
        }
    }
}

impl StorefrontConfig {
    pub const ENV_PREFIX: &'static str = "STOREFRONT__";

    /// Load, apply `CATALOG_HOST`/`OFFERS_HOST`, and validate.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if loading fails or an upstream is not
    /// addressable.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg: Self = load_layered(file, Self::ENV_PREFIX)?;
        cfg.apply_legacy_hosts(legacy_var(CATALOG_HOST_VAR), legacy_var(OFFERS_HOST_VAR));
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn apply_legacy_hosts(&mut self, catalog: Option<String>, offers: Option<String>) {
        if let Some(host) = catalog {
            self.catalog.host = host;
        }
        if let Some(host) = offers {
            self.offers.host = host;
        }
    }

    /// # Errors
    /// [`ConfigError::Missing`] for an empty upstream host,
    /// [`ConfigError::Invalid`] for zero ports or timeouts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, host_key, upstream) in [
            ("catalog", "catalog.host", &self.catalog),
            ("offers", "offers.host", &self.offers),
        ] {
            if upstream.host.trim().is_empty() {
                return Err(ConfigError::Missing { key: host_key });
            }
            if upstream.port == 0 {
                return Err(ConfigError::Invalid {
                    key,
                    reason: "port must not be 0".to_owned(),
                });
            }
            if upstream.rpc_timeout.is_zero() || upstream.connect_timeout.is_zero() {
                return Err(ConfigError::Invalid {
                    key,
                    reason: "timeouts must be positive".to_owned(),
                });
            }
        }
        if self.server.request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "server.request_timeout",
                reason: "must be positive".to_owned(),
            });
        }
        Ok(())
    }
}
