//! Request extractors binding handlers to the persistence layer.

use crate::api::errors::{api_error, ApiError};
use crate::db::{Database, DbSession};
use crate::errors::Error;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::StatusCode;

/// Opens one session per request from the `Database` installed by
/// `routes::app`. Checkout runs on the blocking pool since r2d2 waits
/// synchronously for a free connection.
#[async_trait]
impl<S> FromRequestParts<S> for DbSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let database = parts.extensions.get::<Database>().cloned().ok_or_else(|| {
            api_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database extension missing from router",
            )
        })?;

        let session = tokio::task::spawn_blocking(move || database.session())
            .await
            .map_err(Error::from)??;
        Ok(session)
    }
}
