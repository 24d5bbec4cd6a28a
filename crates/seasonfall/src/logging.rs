//! File logging. The terminal belongs to the UI, so nothing is written to stdout.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SEASONFALL_LOG";

const LOG_FILE: &str = "seasonfall.log";

/// Install the global subscriber. Keep the guard alive until exit so buffered lines are flushed.
pub fn init() -> color_eyre::Result<WorkerGuard> {
    let appender = file_writer(&seasonfall_config::log_dir())?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .try_init()?;
    Ok(guard)
}

/// Open `seasonfall.log` in `dir`, creating the directory first.
fn file_writer(dir: &Path) -> color_eyre::Result<RollingFileAppender> {
    fs::create_dir_all(dir)?;
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE)
        .build(dir)?;
    Ok(appender)
}
