//! Shared helpers for the HTTP integration tests.
//!
//! Builds the real application router so tests exercise the same routing,
//! CORS, and error-mapping stack the binary serves, and wraps
//! `tower::ServiceExt::oneshot` request plumbing behind small helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use bookd::api::{build_router, AppState};
use bookd::directory::{HotelDirectory, OpenDirectory};
use bookd::engine::Engine;
use bookd::notify::EventHub;

pub const TEST_CORS_ORIGIN: &str = "http://localhost:5173";

/// Router over a fresh engine that accepts every hotel key.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(OpenDirectory))
}

/// Router over a fresh engine with the given hotel directory.
pub fn build_test_app_with(directory: Arc<dyn HotelDirectory>) -> Router {
    let engine = Arc::new(Engine::new(directory, Arc::new(EventHub::new()), 16));
    build_router(AppState { engine }, TEST_CORS_ORIGIN)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::PATCH)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with an empty body (the cancel route takes none).
pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
