//! Backend Module
//!
//! This module contains all server-side code for the comment board: an Axum
//! HTTP server with account registration, JWT login and a comment board
//! whose mutations require a bearer token.
//!
//! # Architecture
//!
//! - **`auth`** - Password hashing, token service, account handlers
//! - **`comments`** - Comment handlers
//! - **`middleware`** - Authorization gate, CORS
//! - **`store`** - Persistence trait with PostgreSQL and in-memory backends
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`docs`** - OpenAPI document and Swagger UI
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── auth/           - Authentication
//! ├── comments/       - Comment board
//! ├── middleware/     - Request middleware
//! ├── store/          - Persistence
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── docs.rs         - OpenAPI
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! CORS layer (answers preflight) → tracing → routing → authorization gate
//! (gated routes only) → handler → store → JSON response.
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, BackendError>`; `BackendError` renders
//! as `{"error": "...", "status": N}`.

pub mod auth;
pub mod comments;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod store;

pub use error::BackendError;
pub use server::{create_app, AppState, ServerConfig};
