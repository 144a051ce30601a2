//! Health probe, resume download, static files and API docs

mod common;

use axum::http::{header, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::json;

use comment_board::backend::docs::BEARER_SCHEME;
use comment_board::backend::routes::create_router;
use comment_board::backend::server::config::AssetPaths;
use common::*;

#[tokio::test]
async fn test_health() {
    let response = send(&test_app(), get("/health")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_resume_is_downloaded_as_pdf() {
    let dir = tempfile::tempdir().unwrap();
    let resume_path = dir.path().join("Jane_Doe_Resume.pdf");
    std::fs::write(&resume_path, b"%PDF-1.4 test").unwrap();

    let app = create_router(test_state_with_assets(AssetPaths {
        static_dir: dir.path().to_path_buf(),
        resume_path,
    }));
    let response = send(&app, get("/resume")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers[header::CONTENT_TYPE], "application/pdf");
    assert_eq!(
        response.headers[header::CONTENT_DISPOSITION],
        "attachment; filename=Jane_Doe_Resume.pdf"
    );
    assert_eq!(response.bytes, b"%PDF-1.4 test".to_vec());
}

#[tokio::test]
async fn test_missing_resume_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let app = create_router(test_state_with_assets(AssetPaths {
        static_dir: dir.path().to_path_buf(),
        resume_path: dir.path().join("absent.pdf"),
    }));

    let response = send(&app, get("/resume")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json()["status"], 404);
}

#[tokio::test]
async fn test_static_index_is_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>Comments</h1>").unwrap();

    let app = create_router(test_state_with_assets(AssetPaths {
        static_dir: dir.path().to_path_buf(),
        resume_path: dir.path().join("resume.pdf"),
    }));

    let index = send(&app, get("/")).await;
    assert_eq!(index.status, StatusCode::OK);
    assert_eq!(index.bytes, b"<h1>Comments</h1>".to_vec());

    let missing = send(&app, get("/nope.html")).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = send(&test_app(), get("/api-docs/openapi.json")).await;

    assert_eq!(response.status, StatusCode::OK);
    let doc = response.json();
    assert!(doc["paths"].get("/comment").is_some());
    assert_eq!(
        doc["components"]["securitySchemes"][BEARER_SCHEME]["scheme"],
        "bearer"
    );
}
