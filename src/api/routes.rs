//! API routes configuration module

use crate::api::docs;
use crate::api::handlers::{get_user, health_check, list_users};
use crate::constants::API_PREFIX;
use crate::db::Database;
use axum::{routing::get, Extension, Router};
use tower_http::trace::TraceLayer;

/// Routes for the user entity, to be nested under `API_PREFIX`
pub fn users_router() -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user))
}

/// Creates and configures the API router with all routes
///
/// # Arguments
/// * `database` - Persistence handle shared across handlers
///
/// # Returns
/// * `Router` - Configured router with all API endpoints and middleware
pub fn app(database: Database) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, users_router().merge(docs::router()))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(database))
}
