mod common;

use axum::http::StatusCode;

use common::{body_json, get, send, standard_app};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let app = standard_app().await;

    let resp = send(&app, get("/health")).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "pack-api");
    assert_eq!(body["reoptimize_mode"], "single-pass");
}
