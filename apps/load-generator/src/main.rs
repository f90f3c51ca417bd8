//! Load generator binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use load_generator::{HeadClient, LoadGenConfig, run};
use nftstore_bootstrap::{init_logging, shutdown::cancel_on_signal};

/// Synthetic traffic for the storefront
#[derive(Parser)]
#[command(name = "load-generator")]
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

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cfg = LoadGenConfig::load(cli.config.as_deref())
        .context("invalid load generator configuration")?;
    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&cfg)?);
        return Ok(());
    }

    init_logging(&cfg.logging, cli.verbose)?;

    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let cancel = cancel_on_signal();
    let client = HeadClient::new(cfg.request_timeout);

    tracing::info!(frontend_addr = %cfg.frontend_addr, "load generator started");
    run(&client, &cfg.frontend_addr, &mut rng, &cancel).await;
    Ok(())
}
