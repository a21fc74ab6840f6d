use crate::errors::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use tracing::{debug, error};
use utoipa::ToSchema;

/// JSON error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiError {
    /// Human readable reason
    pub detail: String,
    /// HTTP status code, repeated in the body
    pub code: u16,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiError({}, {})", self.code, self.detail)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            debug!("Request rejected: {}", self);
        }
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        api_error(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
    }
}

/// Helper function to create API errors
pub fn api_error(status: StatusCode, detail: &str) -> ApiError {
    ApiError {
        detail: detail.to_string(),
        code: status.as_u16(),
    }
}
