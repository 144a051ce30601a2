//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Bearer token gate and the `AuthUser` extractor
//! - **`cors`** - Cross-origin policy, including preflight handling
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use comment_board::backend::middleware::auth_middleware;
//!
//! let protected = Router::new()
//!     .route("/comment", post(create_comment))
//!     .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));
//! ```

pub mod auth;
pub mod cors;

pub use auth::{auth_middleware, parse_bearer, AuthUser, AuthenticatedIdentity};
pub use cors::cors_layer;
