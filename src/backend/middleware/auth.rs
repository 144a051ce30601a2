/**
 * Authentication Middleware
 *
 * This module provides the gate in front of routes that require a signed-in
 * user. It extracts and verifies the bearer token from the Authorization
 * header and hands the verified identity to handlers.
 *
 * # Rules
 *
 * The header must be exactly `Bearer <token>`: two parts separated by a
 * single space, the first literally `Bearer`. Anything else (missing header,
 * `Token abc`, `Bearer` alone, `Bearer a b`, an invalid or expired token)
 * is answered with the same 401 body. The specific reason is only logged.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Identity verified by the gate for the current request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub user_id: Uuid,
    pub email: String,
}

/// Split an Authorization header value into its bearer token
///
/// Returns `None` unless the value is exactly `Bearer <token>`.
pub fn parse_bearer(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates it with the `TokenService`
/// 3. Attaches the `AuthenticatedIdentity` to request extensions
///
/// Returns 401 Unauthorized on any failure.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized()
        })?
        .to_str()
        .map_err(|_| {
            tracing::warn!("Authorization header is not visible ASCII");
            BackendError::unauthorized()
        })?;

    let token = parse_bearer(header).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::unauthorized()
    })?;

    let claims = tokens.validate(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::unauthorized()
    })?;

    request.extensions_mut().insert(AuthenticatedIdentity {
        user_id: claims.user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated identity
///
/// Only succeeds behind `auth_middleware`; a handler reached without the
/// gate answers 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedIdentity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedIdentity not found in request extensions");
                BackendError::unauthorized()
            })
    }
}
