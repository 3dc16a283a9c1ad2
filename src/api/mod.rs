//! HTTP layer exposing the derived report and lead export.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::data::source::DashboardSource;

#[derive(Clone)]
pub struct AppState {
    pub source: DashboardSource,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/report", get(routes::report))
        .route("/leads/export", get(routes::export_leads))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(source: DashboardSource, host: String, port: u16) -> Result<()> {
    let router = router(AppState { source });

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving leadscope API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
