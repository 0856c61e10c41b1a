use std::path::Path;

use chrono::{DateTime, Local};

use crate::file::FileError;
use crate::file::metadata::TimeSource;

/// Debug line printed before a file is renamed; microseconds only when non-zero
pub fn format_birthtime(path: &Path, local: &DateTime<Local>) -> String {
    let format = if local.timestamp_subsec_micros() != 0 {
        "%Y-%m-%d %H:%M:%S%.6f"
    } else {
        "%Y-%m-%d %H:%M:%S"
    };
    format!("Birthtime for {}: {}", path.display(), local.format(format))
}

/// The `touch` invocation equivalent to pinning `path` to `stamp`
pub fn format_pin(path: &Path, stamp: &str) -> String {
    format!("touch -mt {} {}", stamp, path.display())
}

pub fn format_updated(path: &Path, source: TimeSource) -> String {
    format!(
        "Updated modification time of '{}' using {}.",
        path.display(),
        source
    )
}

/// Status line for a file the updater left alone
pub fn format_update_failure(path: &Path, error: &FileError) -> String {
    match error {
        FileError::PathNotFound(_) => error.to_string(),
        _ => format!("Could not update '{}': {}", path.display(), error),
    }
}
