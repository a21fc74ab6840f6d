//! Read-only HTTP API over a `users` table.
//!
//! The crate is split the usual way: `db` owns the connection pool, schema
//! bootstrap and queries, `api` owns routing, handlers and the server loop.

pub mod api;
pub mod cli;
pub mod constants;
pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;
