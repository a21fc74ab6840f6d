use crate::api::errors::{api_error, ApiError};
use crate::constants::{HEALTHY, USER_NOT_FOUND};
use crate::db::{DbSession, User, UserRepository};
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Body of the health endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
}

/// Liveness probe. Never touches the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up", body = HealthStatus))
)]
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: HEALTHY.to_string(),
    })
}

/// Lists every user
///
/// # Arguments
/// * `session` - Request-scoped database session
///
/// # Returns
/// * `Result<Json<Vec<User>>, ApiError>` - All users or a 500 on database failure
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Database failure", body = ApiError)
    )
)]
#[axum::debug_handler]
pub async fn list_users(session: DbSession) -> Result<Json<Vec<User>>, ApiError> {
    let users = session
        .run(|conn| UserRepository::new(conn).list_users())
        .await?;
    debug!("Listed {} users", users.len());
    Ok(Json(users))
}

/// Retrieves a user by primary key
///
/// # Arguments
/// * `id` - User id taken from the path
/// * `session` - Request-scoped database session
///
/// # Returns
/// * `Result<Json<User>, ApiError>` - The user, a 404 if absent or a 422 if the id is not an integer
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User primary key")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No user with this id", body = ApiError),
        (status = 422, description = "Id is not an integer", body = ApiError)
    )
)]
#[axum::debug_handler]
pub async fn get_user(
    id: Result<Path<i64>, PathRejection>,
    session: DbSession,
) -> Result<Json<User>, ApiError> {
    let Path(id) =
        id.map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, &e.body_text()))?;

    let user = session
        .run(move |conn| UserRepository::new(conn).get_user(id))
        .await?;

    match user {
        Some(user) => Ok(Json(user)),
        None => Err(api_error(StatusCode::NOT_FOUND, USER_NOT_FOUND)),
    }
}
