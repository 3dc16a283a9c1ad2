use std::{collections::HashMap, path::PathBuf};

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use leadscope::{
    config::Settings,
    data::{client::DashboardClient, error::DashboardError},
};
use tokio::net::TcpListener;

const FIXTURE: &str = include_str!("fixtures/dashboard.json");

fn settings(token: Option<&str>) -> Settings {
    Settings {
        api_base_url: None,
        api_token: token.map(String::from),
        snapshot_path: None,
        request_timeout_secs: 5,
        outputs_dir: PathBuf::from("./outputs"),
    }
}

async fn spawn_upstream(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn dashboard(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let authorised = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some("Bearer secret");
    if !authorised {
        return (StatusCode::UNAUTHORIZED, String::new());
    }
    match params.get("niche").map(String::as_str) {
        None | Some("a b&c") => (StatusCode::OK, FIXTURE.to_string()),
        Some(_) => (StatusCode::BAD_REQUEST, String::new()),
    }
}

fn upstream() -> Router {
    Router::new().route("/api/admin/leads-dashboard", get(dashboard))
}

#[test]
fn niche_is_url_encoded() {
    let client = DashboardClient::new("http://dash.local", &settings(None)).unwrap();
    assert_eq!(
        client.dashboard_url(Some("a b&c")),
        "http://dash.local/api/admin/leads-dashboard?niche=a%20b%26c"
    );
    assert_eq!(
        client.dashboard_url(None),
        "http://dash.local/api/admin/leads-dashboard"
    );
}

#[tokio::test]
async fn fetch_sends_token_and_niche() {
    let base = spawn_upstream(upstream()).await;
    let client = DashboardClient::new(base, &settings(Some("secret"))).unwrap();
    let data = client.fetch(Some("a b&c")).await.unwrap();
    assert_eq!(data.leads.len(), 4);
    assert_eq!(data.funnel.counts.signups, 100);
}

#[tokio::test]
async fn non_success_status_is_typed() {
    let base = spawn_upstream(upstream()).await;
    let client = DashboardClient::new(base, &settings(None)).unwrap();
    let err = client.fetch(None).await.unwrap_err();
    match err {
        DashboardError::Status { status, url } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert!(url.ends_with("/api/admin/leads-dashboard"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn undecodable_payload_is_typed() {
    let router = Router::new().route(
        "/api/admin/leads-dashboard",
        get(|| async { "not json" }),
    );
    let base = spawn_upstream(router).await;
    let client = DashboardClient::new(base, &settings(None)).unwrap();
    let err = client.fetch(None).await.unwrap_err();
    assert!(matches!(err, DashboardError::Decode(_)));
}
