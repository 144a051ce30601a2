//! Authentication test helpers
//!
//! Register and log in through the HTTP API, the way a client would.

use axum::{
    http::{Method, StatusCode},
    Router,
};
use serde_json::{json, Value};

use super::{json_request, send};

/// Registered and logged-in user
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub password: String,
    /// Full Authorization header value, `Bearer <jwt>`
    pub bearer: String,
}

/// POST /user and return the decoded body
pub async fn register(app: &Router, email: &str, password: &str) -> Value {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/user",
            &json!({ "email": email, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "register {email}");
    response.json()
}

/// POST /login and return the `token` field (`Bearer <jwt>`)
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/login",
            &json!({ "email": email, "password": password }),
            None,
        ),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK, "login {email}");
    response.json()["token"]
        .as_str()
        .expect("token")
        .to_string()
}

/// Register and log in a user
pub async fn create_test_user(app: &Router, email: &str, password: &str) -> TestUser {
    let registered = register(app, email, password).await;
    let bearer = login(app, email, password).await;

    TestUser {
        id: registered["id"].as_str().expect("id").to_string(),
        email: email.to_string(),
        password: password.to_string(),
        bearer,
    }
}
