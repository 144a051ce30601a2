/**
 * Comment Handlers
 *
 * - `POST /comment` (gated) - create a comment as the signed-in user
 * - `GET /comments` - list every comment, newest first
 * - `DELETE /comment` (gated) - delete one of the caller's own comments
 *
 * # Deletion Ownership
 *
 * A delete names the comment id and the author's email. The email must
 * resolve to the same user as the token before anything is removed, and the
 * delete itself is scoped to (id, email), so a caller can never remove
 * another user's comment even when it knows that user's id and email.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use uuid::Uuid;

use crate::backend::comments::types::{
    CommentResponse, CreateCommentRequest, DeleteCommentRequest, DeleteCommentResponse,
};
use crate::backend::error::{BackendError, ErrorBody};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;

/// Create a comment
#[utoipa::path(
    post,
    path = "/comment",
    tag = "comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Missing content", body = ErrorBody),
        (status = 401, description = "Missing or invalid token", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<Json<CommentResponse>, BackendError> {
    let Json(request) = payload?;

    if request.content.is_empty() {
        tracing::warn!("Empty comment from {}", identity.email);
        return Err(BackendError::validation("Content is required"));
    }

    let comment = state
        .store
        .create_comment(identity.user_id, &request.content)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create comment for {}: {}", identity.user_id, e);
            BackendError::persistence("Error creating comment")
        })?;

    tracing::info!("Comment {} created by {}", comment.id, comment.email);

    Ok(Json(comment.into()))
}

/// List all comments
#[utoipa::path(
    get,
    path = "/comments",
    tag = "comments",
    responses(
        (status = 200, description = "All comments, newest first", body = [CommentResponse]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommentResponse>>, BackendError> {
    let comments = state.store.list_comments().await.map_err(|e| {
        tracing::error!("Failed to list comments: {}", e);
        BackendError::persistence("Error fetching comments")
    })?;

    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// Delete one of the caller's comments
#[utoipa::path(
    delete,
    path = "/comment",
    tag = "comments",
    request_body = DeleteCommentRequest,
    responses(
        (status = 200, description = "Comment deleted", body = DeleteCommentResponse),
        (status = 400, description = "Missing id", body = ErrorBody),
        (status = 401, description = "Missing token or not the comment's author", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(identity): AuthUser,
    payload: Result<Json<DeleteCommentRequest>, JsonRejection>,
) -> Result<Json<DeleteCommentResponse>, BackendError> {
    let Json(request) = payload?;

    if request.id == Uuid::nil() {
        tracing::warn!("Delete without comment id from {}", identity.email);
        return Err(BackendError::validation("ID is required"));
    }

    let owner = state
        .store
        .get_user_by_email(&request.email)
        .await
        .map_err(|e| {
            tracing::error!("Owner lookup failed: {}", e);
            BackendError::unauthorized()
        })?
        .ok_or_else(|| {
            tracing::warn!("Delete names unknown email {:?}", request.email);
            BackendError::unauthorized()
        })?;

    if owner.id != identity.user_id {
        tracing::warn!(
            "User {} tried to delete comment {} as {}",
            identity.user_id,
            request.id,
            request.email
        );
        return Err(BackendError::unauthorized());
    }

    let deleted = state
        .store
        .delete_comment(request.id, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete comment {}: {}", request.id, e);
            BackendError::persistence("Error deleting comment")
        })?;

    if deleted {
        tracing::info!("Comment {} deleted by {}", request.id, identity.email);
    } else {
        tracing::warn!("Delete of comment {} by {} matched nothing", request.id, identity.email);
    }

    Ok(Json(DeleteCommentResponse {
        message: "Comment deleted successfully".to_string(),
    }))
}
