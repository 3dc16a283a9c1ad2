//! Runtime configuration utilities for leadscope.

use std::{
    env,
    path::PathBuf,
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base URL of the dashboard API, e.g. `https://admin.example.com`.
    pub api_base_url: Option<String>,
    /// Bearer token sent with dashboard API requests.
    pub api_token: Option<String>,
    /// Local `DashboardData` JSON used instead of the API when set.
    pub snapshot_path: Option<PathBuf>,
    /// Upstream request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Root folder for CSV exports.
    pub outputs_dir: PathBuf,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    ///
    /// Reads `.env` first, so call this before installing the tracing
    /// subscriber for `RUST_LOG` there to take effect.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let api_base_url = non_empty_var("DASHBOARD_API_URL")
            .map(|url| url.trim_end_matches('/').to_string());
        let api_token = non_empty_var("DASHBOARD_API_TOKEN");
        let snapshot_path = non_empty_var("DASHBOARD_SNAPSHOT").map(PathBuf::from);
        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        let outputs_dir = env::var("OUTPUTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./outputs"));

        std::fs::create_dir_all(&outputs_dir).context("creating outputs dir")?;

        Ok(Self {
            api_base_url,
            api_token,
            snapshot_path,
            request_timeout_secs,
            outputs_dir,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
