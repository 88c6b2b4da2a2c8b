//! Shared helpers for the HTTP integration test suites.
//!
//! Import via `mod common;` from any test file. Not every suite uses
//! every helper.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use cinema_api::config::ServerConfig;
use cinema_api::state::AppState;

/// Server configuration for tests: local bind, dev CORS origin, default
/// request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the application exactly as the binary does, on the given pool.
pub fn build_test_app(pool: PgPool) -> NormalizePath<Router> {
    cinema_api::build_app(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request and return the raw response.
pub async fn get(app: NormalizePath<Router>, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

/// Send a POST request with a JSON body.
pub async fn post_json(
    app: NormalizePath<Router>,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

/// Send a PUT request with a JSON body.
pub async fn put_json(
    app: NormalizePath<Router>,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// Send a PATCH request with a JSON body.
pub async fn patch_json(
    app: NormalizePath<Router>,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Send a DELETE request and return the raw response.
pub async fn delete(app: NormalizePath<Router>, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Read a response body to completion and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: NormalizePath<Router>,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}
