use std::io;
use std::path::Path;

use filetime::FileTime;

use super::metadata::{FileKind, FileStat};

/// Filesystem calls the renamer and updater need.
///
/// `stat` follows symlinks and reports a missing path as
/// `io::ErrorKind::NotFound`.
pub trait FileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Set the modification time only; access time is left alone
    fn set_modified(&self, path: &Path, mtime: FileTime) -> io::Result<()>;

    fn set_times(&self, path: &Path, atime: FileTime, mtime: FileTime) -> io::Result<()>;
}

/// `FileSystem` backed by `std::fs` and `filetime`
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let metadata = std::fs::metadata(path)?;
        let file_type = metadata.file_type();
        let kind = if file_type.is_file() {
            FileKind::File
        } else if file_type.is_dir() {
            FileKind::Dir
        } else {
            FileKind::Other
        };

        Ok(FileStat {
            kind,
            birthtime: FileTime::from_creation_time(&metadata),
            changed: change_time(&metadata),
            modified: FileTime::from_last_modification_time(&metadata),
            accessed: FileTime::from_last_access_time(&metadata),
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::rename(from, to)
    }

    fn set_modified(&self, path: &Path, mtime: FileTime) -> io::Result<()> {
        filetime::set_file_mtime(path, mtime)
    }

    fn set_times(&self, path: &Path, atime: FileTime, mtime: FileTime) -> io::Result<()> {
        filetime::set_file_times(path, atime, mtime)
    }
}

#[cfg(unix)]
fn change_time(metadata: &std::fs::Metadata) -> Option<FileTime> {
    use std::os::unix::fs::MetadataExt;

    Some(FileTime::from_unix_time(
        metadata.ctime(),
        metadata.ctime_nsec() as u32,
    ))
}

// Windows reports no inode change time
#[cfg(not(unix))]
fn change_time(_metadata: &std::fs::Metadata) -> Option<FileTime> {
    None
}
