use std::path::PathBuf;
use thiserror::Error;

use super::metadata::TimeSource;

/// Errors that can occur while reading or rewriting file timestamps
#[derive(Error, Debug)]
pub enum FileError {
    /// Host or filesystem does not expose the requested timestamp field
    #[error("{field} is not available for {path} on this platform")]
    UnsupportedPlatform { path: PathBuf, field: TimeSource },

    /// A stat, rename or timestamp-set call failed
    #[error("Failed to {operation} {path}: {source}")]
    FileSystemOperationFailed {
        operation: FsOperation,
        path: PathBuf,
        source: std::io::Error,
    },

    /// Both --birthtime and --ctime were given
    #[error("Only one time field can be selected. Choose either birthtime or ctime.")]
    ConflictingOptions,

    /// Neither --birthtime nor --ctime was given
    #[error("No time field selected. Use either --birthtime or --ctime.")]
    MissingOption,

    /// Listed path does not exist
    #[error("'{0}' does not exist.")]
    PathNotFound(PathBuf),

    /// Path ends in `..` or a root, so there is no name to extend
    #[error("'{0}' has no file name")]
    NoFileName(PathBuf),

    /// Timestamp cannot be expressed as a calendar date
    #[error("Timestamp of {path} is out of the representable date range")]
    TimestampOutOfRange { path: PathBuf },
}

/// Filesystem call that produced a `FileSystemOperationFailed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsOperation {
    Stat,
    Rename,
    SetTimes,
}

impl std::fmt::Display for FsOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            FsOperation::Stat => "stat",
            FsOperation::Rename => "rename",
            FsOperation::SetTimes => "set timestamps on",
        };
        f.write_str(verb)
    }
}

/// Result type for file timestamp operations
pub type FileResult<T> = Result<T, FileError>;

impl FileError {
    /// Create a filesystem failure for `path`
    pub fn fs(operation: FsOperation, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystemOperationFailed {
            operation,
            path: path.into(),
            source,
        }
    }

    /// Create an unsupported-field error for `path`
    pub fn unsupported(path: impl Into<PathBuf>, field: TimeSource) -> Self {
        Self::UnsupportedPlatform {
            path: path.into(),
            field,
        }
    }

    /// Whether the error concerns the option set rather than a single file
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::ConflictingOptions | Self::MissingOption)
    }
}
