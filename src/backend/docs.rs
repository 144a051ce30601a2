//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every JSON endpoint and its schemas; the bearer
//! scheme and its use on the gated paths are added by [`SecurityAddon`].
//! The document is served at `/api-docs/openapi.json` and browsable at
//! `/swagger-ui`.

use axum::Router;
use utoipa::openapi::security::{
    HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme,
};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::backend::auth::handlers::types::{
    CredentialsRequest, LoginResponse, LoginUser, UserResponse,
};
use crate::backend::comments::types::{
    CommentResponse, CreateCommentRequest, DeleteCommentRequest, DeleteCommentResponse,
};
use crate::backend::error::ErrorBody;
use crate::backend::routes::static_routes::HealthResponse;

/// Name of the bearer security scheme referenced by gated paths
pub const BEARER_SCHEME: &str = "BearerAuth";

/// Paths whose every operation sits behind the authorization gate
const GATED_PATHS: &[&str] = &["/comment"];

/// Adds the `Authorization: Bearer <jwt>` security scheme and requires it on
/// the gated paths.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        let scheme = HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .bearer_format("JWT")
            .description(Some(
                "Token from POST /login, sent as `Authorization: Bearer <token>`.",
            ))
            .build();
        components.add_security_scheme(BEARER_SCHEME, SecurityScheme::Http(scheme));

        for path in GATED_PATHS {
            let Some(item) = openapi.paths.paths.get_mut(*path) else {
                continue;
            };
            let operations = [
                item.get.as_mut(),
                item.put.as_mut(),
                item.post.as_mut(),
                item.delete.as_mut(),
                item.patch.as_mut(),
            ];
            for operation in operations.into_iter().flatten() {
                operation.security = Some(vec![SecurityRequirement::new(
                    BEARER_SCHEME,
                    Vec::<String>::new(),
                )]);
            }
        }
    }
}

/// OpenAPI document for the comment board API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Comment Board API",
        description = "User registration, token login and a shared comment board."
    ),
    paths(
        crate::backend::auth::handlers::signup::register,
        crate::backend::auth::handlers::login::login,
        crate::backend::comments::handlers::create_comment,
        crate::backend::comments::handlers::list_comments,
        crate::backend::comments::handlers::delete_comment,
        crate::backend::routes::static_routes::health,
    ),
    components(schemas(
        CredentialsRequest,
        UserResponse,
        LoginUser,
        LoginResponse,
        CreateCommentRequest,
        DeleteCommentRequest,
        CommentResponse,
        DeleteCommentResponse,
        HealthResponse,
        ErrorBody,
    )),
    tags(
        (name = "users", description = "Registration and login"),
        (name = "comments", description = "Comment board"),
        (name = "health", description = "Liveness probe")
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the raw document
pub fn swagger_ui_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_endpoints() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();

        for path in ["/user", "/login", "/comment", "/comments", "/health"] {
            assert!(json["paths"].get(path).is_some(), "missing {path}");
        }
        assert!(json["paths"]["/comment"].get("post").is_some());
        assert!(json["paths"]["/comment"].get("delete").is_some());
    }

    #[test]
    fn test_bearer_scheme_is_declared() {
        let json = serde_json::to_value(ApiDoc::openapi()).unwrap();

        let scheme = &json["components"]["securitySchemes"][BEARER_SCHEME];
        assert_eq!(scheme["type"], "http");
        assert_eq!(scheme["scheme"], "bearer");

        for method in ["post", "delete"] {
            let operation = &json["paths"]["/comment"][method];
            assert!(
                operation["security"][0].get(BEARER_SCHEME).is_some(),
                "{method} /comment is not marked as gated"
            );
        }
        assert!(json["paths"]["/login"]["post"].get("security").is_none());
        assert!(json["paths"]["/comments"]["get"].get("security").is_none());
    }

    #[test]
    fn test_swagger_ui_router_creates() {
        let _router: Router<()> = swagger_ui_router();
    }
}
