use std::path::PathBuf;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    routing::get,
    Router,
};
use leadscope::{
    api::{router, AppState},
    config::Settings,
    data::{client::DashboardClient, source::DashboardSource},
};
use tokio::net::TcpListener;
use tower::ServiceExt;

fn state(path: &str) -> AppState {
    AppState {
        source: DashboardSource::File(PathBuf::from(path)),
    }
}

fn fixture_state() -> AppState {
    state(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/dashboard.json"))
}

#[tokio::test]
async fn report_route_returns_derived_metrics() {
    let response = router(fixture_state())
        .oneshot(Request::get("/report").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["rates"]["startRate"], 60.0);
    assert_eq!(json["biggestDropoff"]["lesson"], 4);
}

#[tokio::test]
async fn niche_filter_limits_report() {
    let response = router(fixture_state())
        .oneshot(Request::get("/report?niche=nutrition").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let niches = json["niches"].as_array().unwrap();
    assert_eq!(niches.len(), 1);
    assert_eq!(niches[0]["niche"], "Nutrition");
}

#[tokio::test]
async fn export_route_serves_csv_attachment() {
    let response = router(fixture_state())
        .oneshot(
            Request::get("/leads/export?sort=revenue&status=REFUNDED")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let disposition = response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"leads-export-"));

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let rows: Vec<&str> = text.lines().skip(1).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("refund@example.com,"));
}

#[tokio::test]
async fn load_failure_is_bad_gateway() {
    let response = router(state("/nonexistent/dashboard.json"))
        .oneshot(Request::get("/report").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&body).starts_with("failed to load dashboard"));
}

#[tokio::test]
async fn upstream_server_error_is_bad_gateway() {
    let upstream = Router::new().route(
        "/api/admin/leads-dashboard",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, upstream).await.unwrap();
    });

    let settings = Settings {
        api_base_url: None,
        api_token: None,
        snapshot_path: None,
        request_timeout_secs: 5,
        outputs_dir: PathBuf::from("./outputs"),
    };
    let client = DashboardClient::new(format!("http://{addr}"), &settings).unwrap();
    let state = AppState {
        source: DashboardSource::Api(client),
    };

    let response = router(state)
        .oneshot(Request::get("/report").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8_lossy(&body);
    assert!(text.starts_with("failed to load dashboard:"));
    assert!(text.contains("500"));
}
