//! CLI entry-point for exporting the lead list to CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    config::Settings,
    data::{leads::LeadQuery, source::DashboardSource},
    export::{self, ExportStyle},
};

/// Args for the `export` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Dashboard JSON snapshot to read instead of the API.
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[command(flatten)]
    pub query: LeadQuery,
    /// `quoted` escapes embedded commas and quotes; `literal` does not.
    #[arg(long, value_enum, default_value_t = ExportStyle::Literal)]
    pub style: ExportStyle,
    /// Override the configured outputs directory.
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let source = DashboardSource::resolve(args.input, &settings)?;
    let data = source
        .load(args.query.niche.as_deref())
        .await
        .context("failed to load dashboard")?;
    let leads = args.query.apply(&data.leads);
    let dir = args.out_dir.unwrap_or_else(|| settings.outputs_dir.clone());
    let path = export::write_export(&dir, &leads, args.style)?;
    println!("{}", path.display());
    Ok(())
}
