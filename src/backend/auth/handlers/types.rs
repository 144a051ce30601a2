/**
 * Authentication Handler Types
 *
 * Request and response bodies for registration and login.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Registration and login request
///
/// Missing fields deserialize as empty strings and are rejected by the
/// handlers with 400.
#[derive(Deserialize, Serialize, ToSchema)]
pub struct CredentialsRequest {
    /// User's email address, used as the login name
    #[serde(default)]
    pub email: String,
    /// Plaintext password (at most 72 bytes)
    #[serde(default)]
    pub password: String,
}

impl std::fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Registered user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// User summary embedded in the login response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct LoginUser {
    pub id: Uuid,
    pub email: String,
}

/// Login response
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct LoginResponse {
    /// `Bearer <jwt>`, ready to be sent back as the Authorization header
    #[schema(example = "Bearer eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user: LoginUser,
}
