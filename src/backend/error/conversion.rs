/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, allowing them to be
 * returned directly from handlers and middleware.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::backend::error::types::BackendError;

/// JSON body of every API error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Client-safe error message
    pub error: String,
    /// HTTP status code, repeated for clients that only read the body
    pub status: u16,
}

impl From<&BackendError> for ErrorBody {
    fn from(err: &BackendError) -> Self {
        Self {
            error: err.message().to_string(),
            status: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

/// Any unreadable JSON body (bad syntax, wrong types, wrong content type)
/// is a 400 with one fixed message.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::validation("Invalid request body")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::CONTENT_TYPE, StatusCode};

    #[tokio::test]
    async fn test_into_response_sets_status_and_body() {
        let response = BackendError::validation("ID is required").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "ID is required");
        assert_eq!(json["status"], 400);
    }
}
