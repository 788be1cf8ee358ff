//! Prometheus exposition through the router.
//!
//! Installing the recorder is process-global, so this file holds a single
//! test and runs as its own binary.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use kir_api::api::{create_router, AppState};
use kir_api::database::{DatabaseBinding, MockDatabase};
use kir_api::diagnostics::StaticEnv;
use kir_api::metrics;

async fn get_text(app: Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn scrape_reports_requests_and_diagnostics() {
    let handle = metrics::install().expect("install metrics recorder");
    let state = AppState::new()
        .with_database(DatabaseBinding::ready(MockDatabase::new().with_collections(["anggota"])))
        .with_env(StaticEnv::new())
        .with_metrics(handle.clone());
    let app = create_router(state);

    let (status, _) = get_text(app.clone(), "/api/hello").await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get_text(app.clone(), "/test").await;
    assert_eq!(status, StatusCode::OK);

    handle.run_upkeep();
    let (status, body) = get_text(app, "/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(metrics::METRIC_HTTP_REQUESTS), "{}", body);
    assert!(body.contains("endpoint=\"/api/hello\""), "{}", body);
    assert!(body.contains("status=\"200\""), "{}", body);
    assert!(body.contains(metrics::METRIC_HTTP_REQUEST_LATENCY), "{}", body);
    assert!(
        body.contains("diagnostics_runs_total{outcome=\"working\"} 1"),
        "{}",
        body
    );
}
