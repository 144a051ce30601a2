/**
 * Backend Error Types
 *
 * This module defines the error taxonomy exposed at the HTTP boundary.
 * Lower layers (store, hasher, token service, configuration) keep their own
 * error types; handlers log those and convert them into a `BackendError`
 * that carries only a client-safe message.
 *
 * # Error Categories
 *
 * - `Validation` - missing or empty required fields, unreadable bodies (400)
 * - `Unauthenticated` - missing/malformed/invalid/expired tokens, bad
 *   credentials and ownership mismatches (401, never distinguished)
 * - `NotFound` - static assets that do not exist (404)
 * - `Persistence` - any data-store failure, including uniqueness violations (500)
 * - `Crypto` - hashing or signing failures (500)
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Backend-specific error types
///
/// Every variant holds the message that will be shown to the client, so the
/// message must never contain internal details.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Missing or empty required field, or a body that cannot be decoded
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable error message
        message: String,
    },

    /// Authentication or ownership failure
    ///
    /// Authorization failures (authenticated, but not the resource owner)
    /// use this variant as well so the client cannot tell them apart.
    #[error("Unauthenticated: {message}")]
    Unauthenticated {
        /// Human-readable error message
        message: String,
    },

    /// Requested resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Data-store failure
    #[error("Persistence error: {message}")]
    Persistence {
        /// Human-readable error message
        message: String,
    },

    /// Password hashing or token signing failure
    #[error("Cryptographic error: {message}")]
    Crypto {
        /// Human-readable error message
        message: String,
    },
}

impl BackendError {
    /// Create a new validation error
    ///
    /// # Example
    ///
    /// ```rust
    /// use comment_board::backend::error::BackendError;
    ///
    /// let err = BackendError::validation("Content is required");
    /// assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    /// ```
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a new persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Create a new cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto {
            message: message.into(),
        }
    }

    /// The standard response for every gate rejection and ownership mismatch
    pub fn unauthorized() -> Self {
        Self::unauthenticated("Unauthorized")
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `Unauthenticated` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Persistence` - 500 Internal Server Error
    /// - `Crypto` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::Unauthenticated { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Persistence { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Crypto { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Unauthenticated { message }
            | Self::NotFound { message }
            | Self::Persistence { message }
            | Self::Crypto { message } => message,
        }
    }
}
