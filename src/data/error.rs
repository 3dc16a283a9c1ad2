//! Errors raised while loading a dashboard snapshot.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("dashboard request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("dashboard API returned {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("invalid dashboard payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("reading snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no dashboard source configured; pass --input or set DASHBOARD_API_URL")]
    NoSource,
}

pub type DashboardResult<T> = Result<T, DashboardError>;
