/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. API routes (accounts, comments)
 * 2. Health probe and resume download
 * 3. Swagger UI and the OpenAPI document
 * 4. Fallback: files from the static directory, 404 when absent
 *
 * # Layers
 *
 * Request tracing wraps everything, and CORS is the outermost layer so a
 * preflight `OPTIONS` is answered before routing or the gate run.
 */

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::backend::docs::swagger_ui_router;
use crate::backend::middleware::cors_layer;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::routes::static_routes::{health, resume};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state)
        .route("/health", get(health))
        .route("/resume", get(resume))
        .merge(swagger_ui_router());

    let router = router.fallback_service(ServeDir::new(&app_state.assets.static_dir));

    router
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
