//! Backend Error Module
//!
//! This module defines the errors returned at the HTTP boundary and their
//! conversion into JSON responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation and error body
//! ```
//!
//! Every error is handled at the handler (or middleware) boundary and turned
//! into a flat `{"error", "status"}` body. Internal causes are logged with
//! `tracing` and never reach the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::ErrorBody;
pub use types::BackendError;
