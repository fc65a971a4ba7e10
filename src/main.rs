use anyhow::Result;
use clap::Parser;
use udb_events::{Cli, cli, config::Config, observability};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    observability::init_observability(
        "udb-events",
        &config.observability.log_level,
        config.observability.json,
    )?;

    tracing::debug!(database = %config.database.url, "configuration loaded");

    cli::run(cli, config).await
}
