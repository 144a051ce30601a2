//! Persistence Module
//!
//! The `Store` trait is the only way handlers reach user and comment data.
//! Two implementations ship with the crate:
//!
//! - **`postgres`** - `PgStore`, backed by a `sqlx::PgPool`
//! - **`memory`** - `MemoryStore`, a process-local map used by tests and by
//!   `STORE_BACKEND=memory` runs
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs       - Store trait, records and errors
//! ├── postgres.rs  - PostgreSQL implementation
//! └── memory.rs    - In-memory implementation
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// PostgreSQL-backed store
pub mod postgres;

/// In-memory store
pub mod memory;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Registered user as stored
#[derive(Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Email address, unique and case-sensitive
    pub email: String,
    /// bcrypt hash of the password
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Comment joined with its author's email
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// A user with this email already exists
    #[error("email is already registered")]
    DuplicateEmail,

    /// The referenced user does not exist
    #[error("user {0} does not exist")]
    UnknownUser(Uuid),

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistence operations used by the request handlers
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a user; fails with `DuplicateEmail` if the email is taken
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;

    /// Look up a user by exact email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a comment authored by `user_id`
    async fn create_comment(&self, user_id: Uuid, content: &str) -> Result<Comment, StoreError>;

    /// All comments, newest first, ties broken by id
    async fn list_comments(&self) -> Result<Vec<Comment>, StoreError>;

    /// Delete comment `id` if its author has `email`
    ///
    /// Returns whether a row was removed.
    async fn delete_comment(&self, id: Uuid, email: &str) -> Result<bool, StoreError>;
}
