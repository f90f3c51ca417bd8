//! Load generator configuration.

use std::path::Path;
use std::time::Duration;

use nftstore_bootstrap::{ConfigError, LoggingConfig, legacy_var, load_layered};
use serde::{Deserialize, Serialize};

/// Legacy variable naming the storefront address.
pub const FRONTEND_ADDR_VAR: &str = "FRONTEND_ADDR";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadGenConfig {
    /// Storefront `host` or `host:port`.
    pub frontend_addr: String,

    #[serde(with = "nftstore_utils::humantime_serde")]
    pub request_timeout: Duration,

    /// Fixed RNG seed for a reproducible request sequence.
    pub seed: Option<u64>,

    pub logging: LoggingConfig,
}

impl Default for LoadGenConfig {
    fn default() -> Self {
        Self {
            frontend_addr: "localhost".to_owned(),
            request_timeout: Duration::from_secs(10),
            seed: None,
            logging: LoggingConfig::default(),
        }
    }
}

impl LoadGenConfig {
    pub const ENV_PREFIX: &'static str = "LOADGEN__";

    /// Load, apply `FRONTEND_ADDR`, and validate.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if loading fails or the address is unusable.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut cfg: Self = load_layered(file, Self::ENV_PREFIX)?;
        if let Some(addr) = legacy_var(FRONTEND_ADDR_VAR) {
            cfg.frontend_addr = addr;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    /// [`ConfigError::Missing`] for an empty address,
    /// [`ConfigError::Invalid`] for an address with a scheme or path, or a
    /// zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let addr = self.frontend_addr.trim();
        if addr.is_empty() {
            return Err(ConfigError::Missing {
                key: "frontend_addr",
            });
        }
        if addr.contains('/') {
            return Err(ConfigError::Invalid {
                key: "frontend_addr",
                reason: format!("'{addr}' must be host or host:port"),
            });
        }
        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid {
                key: "request_timeout",
                reason: "must be positive".to_owned(),
            });
        }
        Ok(())
    }
}
