//! OpenAPI document and the two HTML viewers that render it.

use crate::api::errors::ApiError;
use crate::api::handlers::{self, HealthStatus};
use crate::constants::{API_PREFIX, DOCS_PATH, OPENAPI_PATH, REDOC_PATH};
use crate::db::User;
use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Read-only access to user records"
    ),
    paths(handlers::health_check, handlers::list_users, handlers::get_user),
    components(schemas(User, ApiError, HealthStatus)),
    tags(
        (name = "health", description = "Liveness"),
        (name = "users", description = "User records")
    )
)]
pub struct ApiDoc;

/// Routes serving the documentation, to be nested under `API_PREFIX`
pub fn router() -> Router {
    Router::new()
        .route(OPENAPI_PATH, get(openapi_json))
        .route(DOCS_PATH, get(swagger_ui))
        .route(REDOC_PATH, get(redoc))
}

async fn openapi_json() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(ApiDoc::openapi()),
    )
}

async fn swagger_ui() -> Html<String> {
    Html(format!(
        r##"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Users API - Swagger UI</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui.css">
  </head>
  <body>
    <div id="swagger-ui"></div>
    <script src="https://cdn.jsdelivr.net/npm/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
      window.ui = SwaggerUIBundle({{ url: "{API_PREFIX}{OPENAPI_PATH}", dom_id: "#swagger-ui" }});
    </script>
  </body>
</html>"##
    ))
}

async fn redoc() -> Html<String> {
    Html(format!(
        r##"<!doctype html>
<html>
  <head>
    <meta charset="utf-8">
    <title>Users API - ReDoc</title>
  </head>
  <body>
    <redoc spec-url="{API_PREFIX}{OPENAPI_PATH}"></redoc>
    <script src="https://cdn.redoc.ly/redoc/latest/bundles/redoc.standalone.js"></script>
  </body>
</html>"##
    ))
}
