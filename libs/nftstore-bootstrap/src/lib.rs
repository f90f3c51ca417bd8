#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Process bootstrap shared by every nftstore binary.
//!
//! Startup order is always the same:
//! 1. [`config::load_layered`] builds the typed config from defaults, an
//!    optional YAML file and prefixed environment variables.
//! 2. [`logging::init_logging`] installs the `tracing` subscriber.
//! 3. [`runtime::build_runtime`] creates the bounded tokio worker pool.
//! 4. [`shutdown::cancel_on_signal`] ties SIGINT/SIGTERM to a
//!    `CancellationToken` that drives graceful shutdown.

pub mod config;
pub mod logging;
pub mod runtime;
pub mod shutdown;

pub use config::{ConfigError, legacy_var, load_layered};
pub use logging::{LogFormat, LoggingConfig, init_logging};
