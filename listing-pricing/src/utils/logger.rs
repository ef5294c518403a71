//! Logging Infrastructure
//!
//! Logs go to stderr (stdout carries the pricing report), or to a daily
//! rolling file when a log directory is configured.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger
pub fn init_logger() {
    init_logger_with_file(None, false, None);
}

/// Initialize the logger with optional JSON format and file output
///
/// `RUST_LOG` takes precedence over `log_level`. Calling this more than
/// once is harmless; later calls keep the first subscriber.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // Add file output if log_dir is provided
    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.is_dir() {
            let file_appender = tracing_appender::rolling::daily(log_path, "listing-pricing");
            let _ = if json {
                subscriber.json().with_writer(file_appender).try_init()
            } else {
                subscriber.with_ansi(false).with_writer(file_appender).try_init()
            };
            return;
        }
    }

    let _ = if json {
        subscriber.json().with_writer(std::io::stderr).try_init()
    } else {
        subscriber.with_writer(std::io::stderr).try_init()
    };
}
