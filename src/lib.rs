//! Comment Board - Main Library
//!
//! A small JSON-over-HTTP backend: users register with an email and a
//! password, log in for a 24-hour bearer token, and use it to post and
//! delete their own comments on a shared board.
//!
//! # Module Structure
//!
//! - **`backend`** - Axum server, authentication, persistence, routes
//!
//! # Usage
//!
//! ```rust,no_run
//! use comment_board::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `Result<T, E>` with `thiserror` enums per layer
//! - `backend::error::BackendError` at the HTTP boundary

/// Backend server-side code
pub mod backend;
