//! Offers service binary.
//!
//! Configuration: built-in defaults, then `--config` YAML, then `OFFERS__*`
//! environment variables.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use nftstore_bootstrap::{init_logging, runtime::build_runtime, shutdown::cancel_on_signal};
use offers::{OffersConfig, OffersModule};

/// Offers gRPC service
#[derive(Parser)]
#[command(name = "offers-server")]
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

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = OffersConfig::load(cli.config.as_deref()).context("invalid offers configuration")?;
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    init_logging(&cfg.logging, cli.verbose)?;

    let runtime = build_runtime(cfg.server.workers, "offers-worker")?;
    runtime.block_on(async move {
        let cancel = cancel_on_signal();
        let listener = nftstore_transport_grpc::bind(cfg.server.bind_addr).await?;
        OffersModule::new(&cfg).run(listener, cancel).await
    })
}
