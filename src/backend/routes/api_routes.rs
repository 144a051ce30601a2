/**
 * API Routes
 *
 * # Routes
 *
 * ## Public
 * - `POST /user` - User registration
 * - `POST /login` - User login
 * - `GET /comments` - List comments
 *
 * ## Gated (Authorization: Bearer <token>)
 * - `POST /comment` - Create a comment
 * - `DELETE /comment` - Delete one of the caller's comments
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::comments::{create_comment, delete_comment, list_comments};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The gate is applied with `route_layer`, so it only runs for requests
/// that matched a gated route; unknown paths and methods are not turned
/// into 401s.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let gated = Router::new()
        .route("/comment", post(create_comment).delete(delete_comment))
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    router
        .route("/user", post(register))
        .route("/login", post(login))
        .route("/comments", get(list_comments))
        .merge(gated)
}
