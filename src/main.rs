//! Entry point wiring CLI dispatch to the analytics modules.

use anyhow::Result;
use leadscope::{cli::Cli, config::Settings, logging};
use tracing::{info, instrument};

#[tokio::main]
#[instrument]
async fn main() -> Result<()> {
    let settings = Settings::load()?;
    logging::init_tracing()?;
    let cli = Cli::parse();

    info!(?cli, "starting command");
    cli.dispatch(settings).await
}
