//! Comments Module
//!
//! The comment board: creation and deletion behind the authorization gate,
//! listing open to everyone.
//!
//! ```text
//! comments/
//! ├── mod.rs       - Module exports
//! ├── types.rs     - Request/response types
//! └── handlers.rs  - HTTP handlers
//! ```

pub mod handlers;
pub mod types;

pub use handlers::{create_comment, delete_comment, list_comments};
pub use types::{CommentResponse, CreateCommentRequest, DeleteCommentRequest, DeleteCommentResponse};
