//! HTTP client for the dashboard API.

use reqwest::Client;
use tracing::{info, instrument};

use super::{
    dashboard::DashboardData,
    error::{DashboardError, DashboardResult},
};
use crate::config::Settings;

const DASHBOARD_PATH: &str = "/api/admin/leads-dashboard";

/// Thin wrapper over `reqwest` bound to one dashboard API base URL.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl DashboardClient {
    pub fn new(base_url: impl Into<String>, settings: &Settings) -> DashboardResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("leadscope/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .timeout(settings.request_timeout())
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            token: settings.api_token.clone(),
        })
    }

    pub fn dashboard_url(&self, niche: Option<&str>) -> String {
        match niche {
            Some(niche) => format!(
                "{}{DASHBOARD_PATH}?niche={}",
                self.base_url,
                urlencoding::encode(niche)
            ),
            None => format!("{}{DASHBOARD_PATH}", self.base_url),
        }
    }

    /// Fetch one snapshot. Failures are returned as-is; there is no retry.
    #[instrument(skip(self))]
    pub async fn fetch(&self, niche: Option<&str>) -> DashboardResult<DashboardData> {
        let url = self.dashboard_url(niche);
        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status { status, url });
        }
        let body = response.bytes().await?;
        let data: DashboardData = serde_json::from_slice(&body)?;
        info!(%url, leads = data.leads.len(), "fetched dashboard");
        Ok(data)
    }
}
