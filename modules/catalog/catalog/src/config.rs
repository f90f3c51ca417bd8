//! Catalog service configuration.

use std::path::Path;
use std::time::Duration;

use nftstore_bootstrap::{ConfigError, LoggingConfig, legacy_var, load_layered};
use nftstore_transport_grpc::GrpcServerConfig;
use serde::{Deserialize, Serialize};

/// Legacy variable holding the injected latency in whole seconds.
pub const EXTRA_LATENCY_VAR: &str = "EXTRA_LATENCY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub server: GrpcServerConfig,

    /// Delay added to every catalog call, to simulate a slow dependency.
    #[serde(with = "nftstore_utils::humantime_serde")]
    pub injected_latency: Duration,

    pub logging: LoggingConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            server: GrpcServerConfig::on_port(catalog_sdk::DEFAULT_PORT),
            injected_latency: Duration::ZERO,
            logging: LoggingConfig::default(),
        }
    }
}

impl CatalogConfig {
    pub const ENV_PREFIX: &'static str = "CATALOG__";

    /// Load, apply `EXTRA_LATENCY`, and validate.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if any layer fails to load or the result is
    /// invalid.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg: Self = load_layered(file, Self::ENV_PREFIX)?;
        cfg.apply_extra_latency(legacy_var(EXTRA_LATENCY_VAR).as_deref())?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Override `injected_latency` from the legacy whole-seconds value.
    ///
    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the value is not a non-negative
    /// integer.
    pub fn apply_extra_latency(&mut self, raw: Option<&str>) -> Result<(), ConfigError> {
        let Some(raw) = raw else {
            return Ok(());
        };
        let secs: u64 = raw.parse().map_err(|e| ConfigError::Invalid {
            key: EXTRA_LATENCY_VAR,
            reason: format!("'{raw}' is not a whole number of seconds: {e}"),
        })?;
        self.injected_latency = Duration::from_secs(secs);
        Ok(())
    }

    /// # Errors
    /// Returns [`ConfigError::Invalid`] if the server section is unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate().map_err(|e| ConfigError::Invalid {
            key: "server",
            reason: e.to_string(),
        })
    }
}
