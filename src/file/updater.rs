//! Copies creation time or metadata-change time into atime and mtime.
//!
//! Each path is independent: a missing path or a failed call is reported
//! for that path and the batch carries on.

use std::io;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use super::error::{FileError, FileResult, FsOperation};
use super::fs::FileSystem;
use super::metadata::TimeSource;

#[derive(Debug)]
pub enum UpdateOutcome {
    Updated {
        path: PathBuf,
        source: TimeSource,
        time: FileTime,
    },
    /// Nothing was changed for this path; `error` says why
    Failed { path: PathBuf, error: FileError },
}

impl UpdateOutcome {
    pub fn path(&self) -> &Path {
        match self {
            UpdateOutcome::Updated { path, .. } | UpdateOutcome::Failed { path, .. } => path,
        }
    }
}

#[derive(Debug, Default)]
pub struct UpdateSummary {
    pub outcomes: Vec<UpdateOutcome>,
}

impl UpdateSummary {
    pub fn updated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, UpdateOutcome::Updated { .. }))
            .count()
    }

    pub fn missing(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| {
                matches!(
                    o,
                    UpdateOutcome::Failed {
                        error: FileError::PathNotFound(_),
                        ..
                    }
                )
            })
            .count()
    }
}

pub struct Updater<'fs, F: FileSystem> {
    fs: &'fs F,
    source: TimeSource,
}

impl<'fs, F: FileSystem> Updater<'fs, F> {
    pub fn new(fs: &'fs F, source: TimeSource) -> Self {
        Self { fs, source }
    }

    /// Build an updater from the `--birthtime` / `--ctime` flags.
    ///
    /// Exactly one must be set; nothing on disk is touched otherwise.
    pub fn from_flags(fs: &'fs F, birthtime: bool, ctime: bool) -> FileResult<Self> {
        let source = TimeSource::from_flags(birthtime, ctime)?;
        Ok(Self::new(fs, source))
    }

    pub fn source(&self) -> TimeSource {
        self.source
    }

    pub fn run<P: AsRef<Path>>(
        &self,
        paths: &[P],
        mut on_outcome: impl FnMut(&UpdateOutcome),
    ) -> UpdateSummary {
        let mut summary = UpdateSummary::default();
        for path in paths {
            let outcome = self.update_one(path.as_ref());
            on_outcome(&outcome);
            summary.outcomes.push(outcome);
        }
        tracing::info!(
            "Update finished: {} of {} files updated using {}",
            summary.updated(),
            summary.outcomes.len(),
            self.source
        );
        summary
    }

    pub fn update_one(&self, path: &Path) -> UpdateOutcome {
        match self.try_update(path) {
            Ok(time) => {
                tracing::info!("Set atime/mtime of {:?} from {}", path, self.source);
                UpdateOutcome::Updated {
                    path: path.to_path_buf(),
                    source: self.source,
                    time,
                }
            }
            Err(error) => {
                tracing::info!("Not updating {:?}: {}", path, error);
                UpdateOutcome::Failed {
                    path: path.to_path_buf(),
                    error,
                }
            }
        }
    }

    fn try_update(&self, path: &Path) -> FileResult<FileTime> {
        let stat = self.fs.stat(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FileError::PathNotFound(path.to_path_buf()),
            _ => FileError::fs(FsOperation::Stat, path, e),
        })?;
        let time = stat.time(self.source, path)?;
        self.fs
            .set_times(path, time, time)
            .map_err(|e| FileError::fs(FsOperation::SetTimes, path, e))?;
        Ok(time)
    }
}
