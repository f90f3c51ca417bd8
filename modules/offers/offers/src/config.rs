//! Offers service configuration.

use std::path::Path;

use nftstore_bootstrap::{ConfigError, LoggingConfig, load_layered};
use nftstore_transport_grpc::GrpcServerConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OffersConfig {
    pub server: GrpcServerConfig,
    pub logging: LoggingConfig,
}

impl Default for OffersConfig {
    fn default() -> Self {
        Self {
            server: GrpcServerConfig::on_port(offers_sdk::DEFAULT_PORT),
            logging: LoggingConfig::default(),
        }
    }
}

impl OffersConfig {
    pub const ENV_PREFIX: &'static str = "OFFERS__";

    /// # Errors
    /// Returns a [`ConfigError`] if loading fails or the server section is
    /// invalid.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let cfg: Self = load_layered(file, Self::ENV_PREFIX)?;
        cfg.server.validate().map_err(|e| ConfigError::Invalid {
            key: "server",
            reason: e.to_string(),
        })?;
        Ok(cfg)
    }
}
