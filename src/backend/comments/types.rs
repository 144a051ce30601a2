/**
 * Comment Handler Types
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::backend::store::Comment;

/// New comment
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub content: String,
}

/// Comment deletion request
///
/// Both the id and the author's email are required; a missing id
/// deserializes as the nil UUID and is rejected.
#[derive(Deserialize, Serialize, Debug, ToSchema)]
pub struct DeleteCommentRequest {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default)]
    pub email: String,
}

/// Comment as returned by the API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct CommentResponse {
    pub id: Uuid,
    /// Author's email
    pub email: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            email: comment.email,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Confirmation of a deletion
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct DeleteCommentResponse {
    #[schema(example = "Comment deleted successfully")]
    pub message: String,
}
