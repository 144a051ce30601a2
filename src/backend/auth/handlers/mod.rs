//! Authentication Handlers Module
//!
//! HTTP handlers for the public account endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /user - User registration
//! - **`login`** - POST /login - Credential check and token issuance

/// Request and response types
pub mod types;

/// Registration handler
pub mod signup;

/// Login handler
pub mod login;

pub use login::login;
pub use signup::register;
pub use types::{CredentialsRequest, LoginResponse, LoginUser, UserResponse};
