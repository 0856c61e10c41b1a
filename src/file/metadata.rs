use std::path::Path;

use chrono::{DateTime, Local};
use filetime::FileTime;

use super::error::{FileError, FileResult};

/// Timestamp pin format, the same shape `touch -t` accepts
pub const PIN_FORMAT: &str = "%Y%m%d%H%M.%S";

/// Date appended to renamed files
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which metadata field supplies the timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSource {
    /// Creation time
    Birthtime,
    /// Metadata-change time
    Ctime,
}

impl TimeSource {
    /// Pick the source from the two mutually exclusive mode flags
    pub fn from_flags(birthtime: bool, ctime: bool) -> FileResult<Self> {
        match (birthtime, ctime) {
            (true, true) => Err(FileError::ConflictingOptions),
            (false, false) => Err(FileError::MissingOption),
            (true, false) => Ok(Self::Birthtime),
            (false, true) => Ok(Self::Ctime),
        }
    }
}

impl std::fmt::Display for TimeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSource::Birthtime => f.write_str("birthtime"),
            TimeSource::Ctime => f.write_str("ctime"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    File,
    Dir,
    Other,
}

/// Snapshot of the metadata both tools care about.
///
/// `birthtime` and `changed` are `None` when the host or filesystem does not
/// report them; callers turn that into `FileError::UnsupportedPlatform`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub kind: FileKind,
    pub birthtime: Option<FileTime>,
    pub changed: Option<FileTime>,
    pub modified: FileTime,
    pub accessed: FileTime,
}

impl FileStat {
    pub fn is_file(&self) -> bool {
        self.kind == FileKind::File
    }

    /// Read the field selected by `source`, failing if it is not exposed
    pub fn time(&self, source: TimeSource, path: &Path) -> FileResult<FileTime> {
        let field = match source {
            TimeSource::Birthtime => self.birthtime,
            TimeSource::Ctime => self.changed,
        };
        field.ok_or_else(|| FileError::unsupported(path, source))
    }
}

/// Drop the sub-second part, matching the precision of `PIN_FORMAT`
pub fn whole_seconds(time: FileTime) -> FileTime {
    FileTime::from_unix_time(time.unix_seconds(), 0)
}

/// Convert a file timestamp to local calendar time
pub fn to_local(time: FileTime, path: &Path) -> FileResult<DateTime<Local>> {
    DateTime::from_timestamp(time.unix_seconds(), time.nanoseconds())
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| FileError::TimestampOutOfRange {
            path: path.to_path_buf(),
        })
}
