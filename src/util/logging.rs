use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

use crate::app::config::LoggingConfig;

/// Install the global subscriber.
///
/// Human-readable output goes to stderr, so it never mixes with the status
/// lines on stdout. When `logging.file` is set, JSON lines are also written
/// to a daily rotating file in `logs_dir`. Keep the returned guard alive
/// until exit or buffered file output is lost.
pub fn init_logging(verbose: bool, config: &LoggingConfig, logs_dir: Option<&Path>) -> Option<WorkerGuard> {
    let log_level = if verbose {
        LevelFilter::TRACE
    } else {
        config.level_filter().unwrap_or(LevelFilter::WARN)
    };

    let mut guard = None;
    let file_layer = match logs_dir {
        Some(dir) if config.file => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let file_appender = tracing_appender::rolling::daily(dir, "filedate.jsonl");
                let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
                guard = Some(worker_guard);
                Some(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_filter(log_level),
                )
            }
            Err(e) => {
                eprintln!("Warning: cannot create log directory {:?}: {}", dir, e);
                None
            }
        },
        _ => None,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_filter(log_level),
        )
        .with(file_layer)
        .init();

    if verbose {
        tracing::info!("Verbose logging enabled (TRACE level)");
    }

    guard
}
