//! Query parameter types for the HTTP routes.

use serde::Deserialize;

use crate::export::ExportStyle;

#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    pub niche: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StyleQuery {
    #[serde(default)]
    pub style: ExportStyle,
}
