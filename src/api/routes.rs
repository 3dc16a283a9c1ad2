//! HTTP route handlers for Axum.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tracing::warn;

use super::{
    types::{ReportQuery, StyleQuery},
    AppState,
};
use crate::{
    data::{dashboard::DashboardData, leads::LeadQuery},
    export,
    metrics::{self, DashboardReport},
};

type ApiError = (StatusCode, String);

pub async fn report(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> Result<Json<DashboardReport>, ApiError> {
    let data = load(&state, query.niche.as_deref()).await?;
    Ok(Json(metrics::build_report(&data)))
}

pub async fn export_leads(
    State(state): State<AppState>,
    Query(query): Query<LeadQuery>,
    Query(style): Query<StyleQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let data = load(&state, query.niche.as_deref()).await?;
    let leads = query.apply(&data.leads);
    let body = export::render(&leads, style.style)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    let disposition = format!("attachment; filename=\"{}\"", export::today_filename());
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}

/// The whole load fails or succeeds; no partial data is served.
async fn load(state: &AppState, niche: Option<&str>) -> Result<DashboardData, ApiError> {
    state.source.load(niche).await.map_err(|err| {
        warn!(error = %err, "dashboard load failed");
        (
            StatusCode::BAD_GATEWAY,
            format!("failed to load dashboard: {err}"),
        )
    })
}
