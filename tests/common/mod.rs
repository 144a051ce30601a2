//! Common test utilities and helpers
//!
//! - In-memory application state and router
//! - Request builders and response decoding
//! - Authentication helpers (`auth_helpers`)
//! - PostgreSQL fixtures (`database`)

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

use comment_board::backend::auth::passwords::{PasswordHasher, MIN_COST};
use comment_board::backend::auth::sessions::TokenService;
use comment_board::backend::routes::create_router;
use comment_board::backend::server::config::AssetPaths;
use comment_board::backend::server::AppState;
use comment_board::backend::store::{MemoryStore, Store};

/// Signing secret shared by every test app
pub const TEST_SECRET: &[u8] = b"integration-test-secret";

/// State over the given store with the cheapest bcrypt cost
pub fn test_state_with_store(store: Arc<dyn Store>, assets: AssetPaths) -> AppState {
    AppState::new(
        store,
        TokenService::new(TEST_SECRET).expect("token service"),
        PasswordHasher::new(MIN_COST).expect("hasher"),
        assets,
    )
}

/// Fresh in-memory state
pub fn test_state_with_assets(assets: AssetPaths) -> AppState {
    test_state_with_store(Arc::new(MemoryStore::new()), assets)
}

pub fn test_state() -> AppState {
    test_state_with_assets(AssetPaths::default())
}

/// Full router over a fresh in-memory store
pub fn test_app() -> Router {
    create_router(test_state())
}

/// Decoded response
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Vec<u8>,
}

impl TestResponse {
    /// Body as JSON, `Value::Null` when it is not JSON
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap_or(Value::Null)
    }
}

/// Send one request through the router
pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("infallible");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec();

    TestResponse {
        status,
        headers,
        bytes,
    }
}

/// Build a JSON request, optionally with an Authorization header value
pub fn json_request(
    method: Method,
    uri: &str,
    body: &Value,
    authorization: Option<&str>,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("request")
}

/// Build a body-less GET request
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}
