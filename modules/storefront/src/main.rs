//! Storefront gateway binary.
//!
//! Configuration: built-in defaults, then `--config` YAML, then
//! `STOREFRONT__*` environment variables, then `CATALOG_HOST` and
//! `OFFERS_HOST`.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use nftstore_bootstrap::{init_logging, shutdown::cancel_on_signal};
use storefront::{StorefrontConfig, StorefrontModule};

/// Storefront HTTP gateway
#[derive(Parser)]
#[command(name = "storefront-server")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = StorefrontConfig::load(cli.config.as_deref())
        .context("invalid storefront configuration")?;
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    init_logging(&cfg.logging, cli.verbose)?;

    let cancel = cancel_on_signal();
    let module = StorefrontModule::new(&cfg)?;
    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", cfg.server.bind_addr))?;
    module.run(listener, cancel).await
}
