/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /user.
 *
 * # Registration Process
 *
 * 1. Require a non-empty email and password
 * 2. Hash the password with bcrypt (on the blocking pool)
 * 3. Create the user in the store
 * 4. Return the new user's id, email and creation time
 *
 * # Errors
 *
 * A duplicate email is reported as the same generic 500 as any other store
 * failure; the cause is only visible in the logs.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{CredentialsRequest, UserResponse};
use crate::backend::error::{BackendError, ErrorBody};
use crate::backend::server::state::AppState;
use crate::backend::store::StoreError;

/// Register a new user
#[utoipa::path(
    post,
    path = "/user",
    tag = "users",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Missing email or password", body = ErrorBody),
        (status = 500, description = "Hashing or storage failure, including a taken email", body = ErrorBody)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, BackendError> {
    let Json(request) = payload?;

    if request.email.is_empty() || request.password.is_empty() {
        tracing::warn!("Registration without email or password");
        return Err(BackendError::validation("Email and password are required"));
    }

    let email = request.email;
    let password_hash = state
        .hasher
        .hash_blocking(request.password)
        .await
        .map_err(|e| {
            tracing::error!("Failed to hash password: {}", e);
            BackendError::crypto("Error processing password")
        })?;

    let user = state
        .store
        .create_user(&email, &password_hash)
        .await
        .map_err(|e| {
            match e {
                StoreError::DuplicateEmail => {
                    tracing::warn!("Email already registered: {}", email)
                }
                other => tracing::error!("Failed to create user: {}", other),
            }
            BackendError::persistence("Error creating user")
        })?;

    tracing::info!("User registered: {} ({})", user.email, user.id);

    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
        created_at: user.created_at,
    }))
}
