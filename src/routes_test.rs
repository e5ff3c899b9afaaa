use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

async fn get_body(path: &str) -> (StatusCode, Vec<u8>) {
    let response = probe_routes()
        .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn healthz_returns_plain_ok() {
    let (status, body) = get_body("/healthz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn alive_reports_status_and_version() {
    let (status, body) = get_body("/alive").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "alive");
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_probe_path_is_not_found() {
    let (status, _) = get_body("/ready").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
