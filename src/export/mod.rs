//! Lead CSV export and display formatting.

pub mod csv;
pub mod format;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::info;

use crate::data::dashboard::Lead;

pub use self::csv::{render, ExportStyle, HEADER};

/// `leads-export-YYYY-MM-DD.csv` for the given day.
pub fn export_filename(date: NaiveDate) -> String {
    format!("leads-export-{}.csv", date.format("%Y-%m-%d"))
}

pub fn today_filename() -> String {
    export_filename(Local::now().date_naive())
}

/// Render `leads` and write them under `dir`, returning the file path.
pub fn write_export(dir: &Path, leads: &[Lead], style: ExportStyle) -> Result<PathBuf> {
    std::fs::create_dir_all(dir).context("creating export dir")?;
    let path = dir.join(today_filename());
    let body = render(leads, style)?;
    std::fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), rows = leads.len(), ?style, "wrote lead export");
    Ok(path)
}
