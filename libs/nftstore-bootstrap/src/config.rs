//! Layered configuration loading.
//!
//! Precedence (lowest to highest):
//! 1. `T::default()`
//! 2. YAML file given on the command line (if any)
//! 3. environment variables `<PREFIX><SECTION>__<KEY>`
//!
//! Binaries apply their legacy environment variables on top and validate the
//! result before serving.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors raised while assembling configuration at startup.
///
/// All of them are fatal: a process never starts serving with a config that
/// failed to load or validate.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("missing required configuration value '{key}'")]
    Missing { key: &'static str },

    #[error("invalid configuration value '{key}': {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Load a typed config from defaults, an optional YAML file and environment.
///
/// `env_prefix` includes its trailing separator, e.g. `"CATALOG__"`; nested
/// keys are separated by `__` (`CATALOG__SERVER__BIND_ADDR`).
///
/// # Errors
/// Returns [`ConfigError::FileNotFound`] if `file` is given but missing and
/// [`ConfigError::Load`] if any layer fails to parse or extract.
pub fn load_layered<T>(file: Option<&Path>, env_prefix: &str) -> Result<T, ConfigError>
where
    T: Serialize + DeserializeOwned + Default,
{
    figment_for::<T>(file, env_prefix)?
        .extract()
        .map_err(|e| ConfigError::Load(Box::new(e)))
}

fn figment_for<T>(file: Option<&Path>, env_prefix: &str) -> Result<Figment, ConfigError>
where
    T: Serialize + Default,
{
    let mut figment = Figment::from(Serialized::defaults(T::default()));

    if let Some(path) = file {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }
        figment = figment.merge(Yaml::file(path));
    }

    Ok(figment.merge(Env::prefixed(env_prefix).split("__")))
}

/// Read a legacy, unprefixed environment variable.
///
/// Unset and blank values are both treated as absent.
#[must_use]
pub fn legacy_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
