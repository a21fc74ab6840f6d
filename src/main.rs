//! Main entry point for the application.
//!
//! Loads environment variables and CLI configuration, initializes logging,
//! then runs the HTTP server on a runtime sized by `--workers`.

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, warn};
use users_api::api::server;
use users_api::cli::Cli;
use users_api::utils;

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    utils::init_logging(cli.logging_level.as_deref(), cli.log_to_file);

    if let Err(e) = dotenv {
        warn!("Failed to load .env file: {}", e);
    }

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(usize::from(cli.workers))
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to build runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "Starting server on {}:{} with {} worker(s)",
        cli.host, cli.port, cli.workers
    );

    match runtime.block_on(server::launch_server(&cli.server_config())) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
