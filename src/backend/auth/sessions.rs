/**
 * Session Tokens
 *
 * This module issues and validates the signed identity tokens (JWT) handed
 * out at login.
 *
 * # Token Format
 *
 * HS256-signed JWT whose payload carries `user_id`, `email`, `iat` and `exp`.
 * Tokens expire 24 hours after issuance. They are never persisted: the
 * signature and the expiry are the only state, so there is no revocation.
 *
 * # Validation
 *
 * - The header algorithm must be exactly HS256; tokens signed with any other
 *   algorithm (or none) are rejected before the signature is looked at.
 * - Expiry is checked against the caller-supplied clock with zero leeway.
 * - Every failure is a `TokenError`; callers treat all of them the same way.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// How long an issued token stays valid
pub const TOKEN_TTL_HOURS: i64 = 24;

const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub user_id: Uuid,
    /// Email, copied for display
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Token issuance and validation errors
#[derive(Debug, Error)]
pub enum TokenError {
    /// The signing secret is empty
    #[error("JWT secret must not be empty")]
    MissingSecret,

    /// Signing failed
    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),

    /// Malformed token, bad signature or wrong algorithm
    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    /// The token's expiry has passed
    #[error("token has expired")]
    Expired,
}

/// Issues and validates identity tokens with a process-wide secret
///
/// Built once at startup and shared read-only between requests.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Create a token service from the signing secret
    ///
    /// # Errors
    ///
    /// `TokenError::MissingSecret` if `secret` is empty.
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::MissingSecret);
        }

        let mut validation = Validation::new(SIGNING_ALGORITHM);
        // Expiry is checked in `validate_at` so the clock can be supplied.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Issue a token for a user, valid for 24 hours from now
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Issue a token as if the current time were `now`
    pub fn issue_at(
        &self,
        user_id: Uuid,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            user_id,
            email: email.to_string(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify a token and return its claims
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// Verify a token against the clock value `now`
    pub fn validate_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(TokenError::Invalid)?;

        if now.timestamp() >= data.claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &SIGNING_ALGORITHM)
            .finish_non_exhaustive()
    }
}
