/// Prefix under which the versioned API and its documentation are mounted
pub const API_PREFIX: &str = "/api/v1";

/// Location of the generated OpenAPI document, relative to `API_PREFIX`
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Swagger UI page, relative to `API_PREFIX`
pub const DOCS_PATH: &str = "/docs";

/// ReDoc page, relative to `API_PREFIX`
pub const REDOC_PATH: &str = "/redoc";

/// Body of the 404 returned when a user id has no row. Existing clients
/// match on this exact text.
pub const USER_NOT_FOUND: &str = "Usuário não encontrado";

/// Status reported by the health endpoint
pub const HEALTHY: &str = "healthy";

/// Log filter used when neither `--logging-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_DIRECTIVE: &str = "users_api=info,tower_http=info";

/// File name used by the rolling log appender
pub const LOG_FILE_NAME: &str = "users-api.log";
