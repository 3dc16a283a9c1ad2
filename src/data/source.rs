//! Resolves where a dashboard snapshot is loaded from.

use std::path::PathBuf;

use tracing::info;

use super::{
    client::DashboardClient,
    dashboard::{niche_eq, DashboardData},
    error::{DashboardError, DashboardResult},
};
use crate::config::Settings;

#[derive(Debug, Clone)]
pub enum DashboardSource {
    /// A `DashboardData` JSON file on disk.
    File(PathBuf),
    /// The live dashboard API.
    Api(DashboardClient),
}

impl DashboardSource {
    /// An explicit `--input` wins over `DASHBOARD_SNAPSHOT`, which wins over
    /// `DASHBOARD_API_URL`.
    pub fn resolve(input: Option<PathBuf>, settings: &Settings) -> DashboardResult<Self> {
        if let Some(path) = input.or_else(|| settings.snapshot_path.clone()) {
            return Ok(Self::File(path));
        }
        match &settings.api_base_url {
            Some(url) => Ok(Self::Api(DashboardClient::new(url.clone(), settings)?)),
            None => Err(DashboardError::NoSource),
        }
    }

    /// Load a snapshot. File snapshots are filtered to `niche` locally so
    /// both sources answer the same question.
    pub async fn load(&self, niche: Option<&str>) -> DashboardResult<DashboardData> {
        match self {
            Self::Api(client) => client.fetch(niche).await,
            Self::File(path) => {
                let raw = tokio::fs::read(path)
                    .await
                    .map_err(|source| DashboardError::Io {
                        path: path.clone(),
                        source,
                    })?;
                let mut data: DashboardData = serde_json::from_slice(&raw)?;
                info!(path = %path.display(), leads = data.leads.len(), "loaded dashboard snapshot");
                if let Some(niche) = niche {
                    restrict_to_niche(&mut data, niche);
                }
                Ok(data)
            }
        }
    }
}

fn restrict_to_niche(data: &mut DashboardData, niche: &str) {
    data.niche_stats.retain(|stats| niche_eq(&stats.niche, niche));
    data.leads.retain(|lead| {
        lead.category
            .as_deref()
            .is_some_and(|c| niche_eq(c, niche))
    });
}
