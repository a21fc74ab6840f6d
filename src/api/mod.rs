/// OpenAPI document and documentation pages
pub mod docs;
/// API error types and handling
pub mod errors;
/// Extractors wiring handlers to the database
pub mod extract;
/// HTTP handlers for health and user endpoints
pub mod handlers;
/// Routes configuration and setup
pub mod routes;
/// HTTP server implementation
pub mod server;
