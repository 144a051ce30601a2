//! Authentication Module
//!
//! This module handles password hashing, token issuance and the account
//! endpoints built on them.
//!
//! # Architecture
//!
//! - **`passwords`** - bcrypt hashing and verification
//! - **`sessions`** - JWT issuance and validation
//! - **`handlers`** - HTTP handlers for registration and login
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── passwords.rs    - Credential hasher
//! ├── sessions.rs     - Token service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: email and password → password hashed → user stored
//! 2. **Login**: email and password → hash verified → `Bearer <jwt>` returned
//! 3. **Gated request**: `Authorization: Bearer <jwt>` → token verified by
//!    `middleware::auth` → identity handed to the handler
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens are used for stateless authentication
//! - Tokens expire after 24 hours and cannot be revoked
//! - Invalid credentials return 401 (no information leakage)

/// Credential hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{login, register};
pub use passwords::{HashError, PasswordHasher};
pub use sessions::{Claims, TokenError, TokenService};
