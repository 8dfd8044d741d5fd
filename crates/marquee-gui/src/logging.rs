//! Logging setup: stderr plus a daily-rolling file under the data directory.
//!
//! The filter comes from `--log-filter`, then `RUST_LOG`, then
//! [`DEFAULT_FILTER`].

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use marquee_core::config::AppConfig;

pub const DEFAULT_FILTER: &str = "marquee_gui=info,marquee_core=info,marquee_api=info,warn";

const LOG_FILE: &str = "marquee.log";

/// Install the global subscriber. Keep the returned guard alive for the
/// whole run so buffered file output is flushed on exit.
pub fn init(cli_filter: Option<&str>) -> Option<WorkerGuard> {
    let filter = match cli_filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let log_dir = AppConfig::log_dir();
    let (file_layer, guard, file_error) = match std::fs::create_dir_all(&log_dir) {
        Ok(()) => {
            let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard), None)
        }
        Err(e) => (None, None, Some(e)),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    match file_error {
        None => tracing::info!("Log directory: {}", log_dir.display()),
        Some(e) => tracing::warn!("File logging disabled ({}): {e}", log_dir.display()),
    }
    guard
}
