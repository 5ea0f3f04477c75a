use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use fileshare::{api::HttpListingClient, config::Config, config::init_logging, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(config.log_file.as_deref(), config.log_level)?;

    let client = HttpListingClient::new(&config.server)
        .with_context(|| format!("invalid server URL {}", config.server))?;
    info!(endpoint = %client.endpoint(), "starting");

    ui::run(Arc::new(client)).await
}
