/**
 * Static Route Handlers
 *
 * Non-API routes:
 * - `GET /health` - liveness probe
 * - `GET /resume` - the configured PDF as a download
 * - everything else - files from the static directory (see `router.rs`)
 */

use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::backend::error::BackendError;
use crate::backend::server::config::AssetPaths;

/// Liveness probe body
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
}

/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Server is up", body = HealthResponse))
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Serve the resume PDF as an attachment
pub async fn resume(State(assets): State<Arc<AssetPaths>>) -> Result<Response, BackendError> {
    let path = &assets.resume_path;
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        tracing::warn!("Cannot read resume at {}: {}", path.display(), e);
        BackendError::not_found("Resume not found")
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume.pdf".to_string());

    Ok((
        [
            (CONTENT_TYPE, "application/pdf".to_string()),
            (CONTENT_DISPOSITION, format!("attachment; filename={file_name}")),
        ],
        bytes,
    )
        .into_response())
}
