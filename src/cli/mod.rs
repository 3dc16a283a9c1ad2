//! Command-line interface wiring for leadscope.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::Settings;

pub mod export;
pub mod report;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Lead funnel and cohort analytics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Report(args) => report::run(args, settings).await,
            Commands::Export(args) => export::run(args, settings).await,
            Commands::Serve(args) => serve::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Derive funnel, drop-off and week-over-week metrics.
    Report(report::Args),
    /// Write the filtered lead list to CSV.
    Export(export::Args),
    /// Serve the JSON report and CSV export over HTTP.
    Serve(serve::Args),
}

/// Output format for the `report` command.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}
