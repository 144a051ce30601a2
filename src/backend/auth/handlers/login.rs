/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a JWT valid for 24 hours
 * 4. Return `Bearer <token>` and the user's id and email
 *
 * # Security
 *
 * - Unknown email, wrong password and a failed lookup all return the same
 *   401 "Invalid credentials" body (no user enumeration)
 * - An unknown email still pays one bcrypt round, so response time does not
 *   reveal which emails are registered
 * - Passwords and tokens are never logged
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{CredentialsRequest, LoginResponse, LoginUser};
use crate::backend::error::{BackendError, ErrorBody};
use crate::backend::server::state::AppState;

fn invalid_credentials() -> BackendError {
    BackendError::unauthenticated("Invalid credentials")
}

/// Log in and receive a bearer token
#[utoipa::path(
    post,
    path = "/login",
    tag = "users",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Authenticated", body = LoginResponse),
        (status = 400, description = "Missing email or password", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Token signing failure", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload?;

    if request.email.is_empty() || request.password.is_empty() {
        tracing::warn!("Login without email or password");
        return Err(BackendError::validation("Email and password are required"));
    }

    let user = state
        .store
        .get_user_by_email(&request.email)
        .await
        .map_err(|e| {
            tracing::error!("User lookup failed: {}", e);
            invalid_credentials()
        })?;

    let Some(user) = user else {
        tracing::warn!("Login for unknown user: {}", request.email);
        state.hasher.burn_blocking(request.password).await;
        return Err(invalid_credentials());
    };

    let valid = state
        .hasher
        .verify_blocking(request.password, user.password_hash.clone())
        .await
        .map_err(|e| {
            tracing::error!("Password verification error for {}: {}", user.email, e);
            invalid_credentials()
        })?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(invalid_credentials());
    }

    let token = state.tokens.issue(user.id, &user.email).map_err(|e| {
        tracing::error!("Failed to create token: {}", e);
        BackendError::crypto("Error generating token")
    })?;

    tracing::info!("User logged in: {} ({})", user.email, user.id);

    Ok(Json(LoginResponse {
        token: format!("Bearer {token}"),
        user: LoginUser {
            id: user.id,
            email: user.email,
        },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn request(email: &str, password: &str) -> Result<Json<CredentialsRequest>, JsonRejection> {
        Ok(Json(CredentialsRequest {
            email: email.to_string(),
            password: password.to_string(),
        }))
    }

    async fn state_with_user(email: &str, password: &str) -> AppState {
        let state = AppState::for_tests();
        let hash = state.hasher.hash(password).unwrap();
        state.store.create_user(email, &hash).await.unwrap();
        state
    }

    #[tokio::test]
    async fn test_login_success() {
        let state = state_with_user("a@x.com", "secret123").await;

        let Json(response) = login(State(state.clone()), request("a@x.com", "secret123"))
            .await
            .unwrap();

        assert_eq!(response.user.email, "a@x.com");
        let token = response.token.strip_prefix("Bearer ").unwrap();
        let claims = state.tokens.validate(token).unwrap();
        assert_eq!(claims.user_id, response.user.id);
        assert_eq!(claims.email, "a@x.com");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let state = state_with_user("a@x.com", "secret123").await;

        let wrong_password = login(State(state.clone()), request("a@x.com", "secret124"))
            .await
            .unwrap_err();
        let unknown_user = login(State(state.clone()), request("b@x.com", "secret123"))
            .await
            .unwrap_err();

        assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);

        let a = axum::body::to_bytes(wrong_password.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        let b = axum::body::to_bytes(unknown_user.into_response().into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_login_rejects_suffix_past_bcrypt_limit() {
        let password = "p".repeat(72);
        let state = state_with_user("a@x.com", &password).await;

        let err = login(State(state.clone()), request("a@x.com", &format!("{password}x")))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);

        assert!(login(State(state), request("a@x.com", &password)).await.is_ok());
    }

    #[tokio::test]
    async fn test_unknown_user_pays_bcrypt_cost() {
        use crate::backend::auth::passwords::PasswordHasher;
        use crate::backend::auth::sessions::TokenService;
        use crate::backend::server::config::AssetPaths;
        use crate::backend::store::MemoryStore;
        use std::sync::Arc;
        use std::time::{Duration, Instant};

        // Cost 10 takes tens of milliseconds per hash; a bare map lookup
        // takes microseconds.
        let state = AppState::new(
            Arc::new(MemoryStore::new()),
            TokenService::new(b"test-secret").unwrap(),
            PasswordHasher::new(10).unwrap(),
            AssetPaths::default(),
        );

        let started = Instant::now();
        let err = login(State(state), request("nobody@x.com", "secret123"))
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
        assert!(started.elapsed() >= Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_login_requires_both_fields() {
        let state = AppState::for_tests();

        let err = login(State(state), request("a@x.com", "")).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
