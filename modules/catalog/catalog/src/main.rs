//! Catalog service binary.
//!
//! Configuration is loaded from, in increasing priority:
//! 1. built-in defaults
//! 2. the `--config` YAML file
//! 3. `CATALOG__*` environment variables
//! 4. `EXTRA_LATENCY` (whole seconds)

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use catalog::{CatalogConfig, CatalogModule};
use nftstore_bootstrap::{init_logging, runtime::build_runtime, shutdown::cancel_on_signal};

/// Catalog gRPC service
#[derive(Parser)]
#[command(name = "catalog-server")]
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

    let cfg = CatalogConfig::load(cli.config.as_deref()).context("invalid catalog configuration")?;
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    init_logging(&cfg.logging, cli.verbose)?;

    let runtime = build_runtime(cfg.server.workers, "catalog-worker")?;
    runtime.block_on(async move {
        let cancel = cancel_on_signal();
        let listener = nftstore_transport_grpc::bind(cfg.server.bind_addr).await?;
        CatalogModule::new(&cfg).run(listener, cancel).await
    })
}
