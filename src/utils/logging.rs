use crate::constants::{DEFAULT_LOG_DIRECTIVE, LOG_FILE_NAME};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Resolves the filter for this service.
///
/// Without a directive only this crate and the HTTP trace layer log, at
/// `info`. An unparsable directive falls back to the same default.
pub fn build_filter(directive: Option<&str>) -> EnvFilter {
    match directive {
        Some(d) => EnvFilter::try_new(d).unwrap_or_else(|_| {
            eprintln!(
                "Invalid log directive '{}', defaulting to '{}'",
                d, DEFAULT_LOG_DIRECTIVE
            );
            EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
        }),
        None => EnvFilter::new(DEFAULT_LOG_DIRECTIVE),
    }
}

/// Installs the global subscriber.
///
/// # Arguments
///
/// * `directive` - `EnvFilter` directive from `--logging-level`/`RUST_LOG`, if any
/// * `with_file` - Also write plain-text logs to `logs/users-api.log`, rotated daily
pub fn init_logging(directive: Option<&str>, with_file: bool) {
    let file_layer = with_file.then(|| {
        fmt::layer()
            .with_ansi(false)
            .with_target(true)
            .with_writer(RollingFileAppender::new(Rotation::DAILY, "logs", LOG_FILE_NAME))
    });

    tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(fmt::layer().with_target(true))
        .with(file_layer)
        .init();
}
