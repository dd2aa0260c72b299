#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use pack_api::catalog::{CatalogService, CatalogStore, MemoryStore, PackSizeCatalog};
use pack_api::config::Config;
use pack_api::fulfillment::ReoptimizeMode;
use pack_api::routes::build_router;
use pack_api::state::AppState;
use serde_json::Value;
use tower::util::ServiceExt;

pub const STANDARD_SIZES: [i64; 5] = [250, 500, 1000, 2000, 5000];

pub async fn app_with_store(store: Arc<dyn CatalogStore>, mode: ReoptimizeMode) -> Router {
    let config = Config {
        reoptimize_mode: mode,
        ..Config::default()
    };
    let catalog = CatalogService::open(store, config.default_pack_sizes.clone())
        .await
        .unwrap();
    build_router(AppState::new(config, catalog))
}

pub async fn app_with_sizes(sizes: &[i64]) -> Router {
    let catalog = PackSizeCatalog::from_sizes(sizes.iter().copied()).unwrap();
    app_with_store(
        Arc::new(MemoryStore::with_catalog(catalog)),
        ReoptimizeMode::SinglePass,
    )
    .await
}

pub async fn standard_app() -> Router {
    app_with_sizes(&STANDARD_SIZES).await
}

pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, req: Request<Body>) -> Response<Body> {
    app.clone().oneshot(req).await.unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
