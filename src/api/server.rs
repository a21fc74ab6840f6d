use crate::api::routes;
use crate::db::Database;
use crate::errors::Error;
use std::net::{IpAddr, SocketAddr};
use tracing::{error, info};

/// Settings needed to bring the HTTP server up
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
}

/// Connects to the database and makes sure every entity table exists.
///
/// Runs before the listener is bound; any error here means the process
/// cannot serve.
pub fn on_startup(database_url: &str) -> Result<Database, Error> {
    let database = Database::connect(database_url)?;
    database.init_schema()?;
    Ok(database)
}

pub fn on_shutdown() {
    info!("Server shut down");
}

/// Starts and runs the HTTP server using Axum web framework
///
/// # Arguments
/// * `config` - Listen address and database location
///
/// # Returns
/// * `Result<(), Error>` - Ok once the server has shut down gracefully
pub async fn launch_server(config: &ServerConfig) -> Result<(), Error> {
    let database = on_startup(&config.database_url)?;

    let app = routes::app(database);

    let addr = SocketAddr::new(config.host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    on_shutdown();
    Ok(())
}

/// Waits for SIGINT or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
