//! File logging via tracing
//!
//! The TUI owns stdout and headless mode writes NDJSON there, so logs only
//! ever go to a daily rolling file.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "ARCA_LOG";

const LOG_FILE_PREFIX: &str = "arca.log";
const DEFAULT_FILTER: &str = "arca_console=info,arca_app=info,arca_client=info,warn";

/// Install the global subscriber.
///
/// ```bash
/// ARCA_LOG=debug arca
/// ARCA_LOG=arca_client=trace arca --headless --text-file law.txt
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_layer = fmt::layer()
        .with_writer(appender)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(
        "ARCA console {} logging to {}",
        env!("CARGO_PKG_VERSION"),
        log_dir.display()
    );
    Ok(())
}

/// `<data_local_dir>/arca-console/logs`, or `./arca-console/logs` when the
/// platform has no data dir
pub fn log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("arca-console")
        .join("logs")
}
