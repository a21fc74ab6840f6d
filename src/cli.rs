use crate::api::server::ServerConfig;
use clap::Parser;
use std::net::IpAddr;

/// Command line interface for the application.
///
/// Every flag can also be supplied through the environment or a `.env` file.
#[derive(Parser, Debug)]
#[command(version, about = "Read-only HTTP API over the users table")]
pub struct Cli {
    /// Database connection string (a SQLite file path)
    #[arg(long, env = "DATABASE_URL", default_value = "users.db")]
    pub database_url: String,

    /// Interface to bind
    #[arg(long, env = "USERS_API_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "USERS_API_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Number of runtime worker threads
    #[arg(
        long,
        env = "USERS_API_WORKERS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub workers: u16,

    /// `EnvFilter` directive, e.g. "debug" or "users_api=debug,tower_http=warn".
    /// Defaults to info for this service and its HTTP traces only
    #[arg(long, env = "RUST_LOG")]
    pub logging_level: Option<String>,

    /// Also write logs to a daily rotating file under ./logs
    #[arg(long, env = "USERS_API_LOG_TO_FILE")]
    pub log_to_file: bool,
}

impl Cli {
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            host: self.host,
            port: self.port,
            database_url: self.database_url.clone(),
        }
    }
}
