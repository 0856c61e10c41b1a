//! Appends each file's creation date to its name.
//!
//! Files are handled one at a time in the order given. Anything that is not
//! an existing regular file is skipped without a report. By default the first
//! hard failure ends the run; with `keep_going` the failure is recorded and
//! the remaining files are still processed.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use filetime::FileTime;

use super::error::{FileError, FileResult, FsOperation};
use super::fs::FileSystem;
use super::metadata::{self, TimeSource, DATE_FORMAT, PIN_FORMAT};
use super::naming::plan_rename;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenameOptions {
    /// Drop a leading numeric token such as a year
    pub remove_prefix: bool,
    /// Pin the modification time to the creation time before and after renaming
    pub set_modification_time: bool,
    /// Report each file's creation time before processing it
    pub debug: bool,
    /// Record per-file failures instead of stopping at the first one
    pub keep_going: bool,
}

/// Progress notifications, emitted while files are processed
#[derive(Debug)]
pub enum RenameEvent<'a> {
    /// Creation time resolved (debug mode only)
    Birthtime {
        path: &'a Path,
        local: DateTime<Local>,
    },
    /// Modification time is about to be pinned; `stamp` uses `PIN_FORMAT`
    Pinning { path: &'a Path, stamp: String },
    /// A file failed and the run continues (keep-going mode only)
    Failed { path: &'a Path, error: &'a FileError },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameOutcome {
    /// Not an existing regular file
    Skipped { path: PathBuf },
    /// Name already ends with the creation date
    AlreadyDated { path: PathBuf },
    Renamed { from: PathBuf, to: PathBuf },
}

#[derive(Debug, Default)]
pub struct RenameSummary {
    pub outcomes: Vec<RenameOutcome>,
    pub failures: Vec<(PathBuf, FileError)>,
}

impl RenameSummary {
    pub fn renamed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, RenameOutcome::Renamed { .. }))
            .count()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub struct Renamer<'fs, F: FileSystem> {
    fs: &'fs F,
    options: RenameOptions,
}

impl<'fs, F: FileSystem> Renamer<'fs, F> {
    pub fn new(fs: &'fs F, options: RenameOptions) -> Self {
        Self { fs, options }
    }

    /// Process `paths` in order
    pub fn run<P: AsRef<Path>>(
        &self,
        paths: &[P],
        mut on_event: impl FnMut(RenameEvent<'_>),
    ) -> FileResult<RenameSummary> {
        let mut summary = RenameSummary::default();

        for path in paths {
            let path = path.as_ref();
            match self.rename_one(path, &mut on_event) {
                Ok(outcome) => summary.outcomes.push(outcome),
                Err(error) if self.options.keep_going => {
                    tracing::info!("Rename failed for {:?}: {}", path, error);
                    on_event(RenameEvent::Failed {
                        path,
                        error: &error,
                    });
                    summary.failures.push((path.to_path_buf(), error));
                }
                Err(error) => {
                    tracing::info!("Rename failed for {:?}, aborting: {}", path, error);
                    return Err(error);
                }
            }
        }

        tracing::info!(
            "Rename finished: {} renamed, {} processed, {} failed",
            summary.renamed(),
            summary.outcomes.len(),
            summary.failures.len()
        );
        Ok(summary)
    }

    /// Process a single path
    pub fn rename_one(
        &self,
        path: &Path,
        on_event: &mut dyn FnMut(RenameEvent<'_>),
    ) -> FileResult<RenameOutcome> {
        let stat = match self.fs.stat(path) {
            Ok(stat) if stat.is_file() => stat,
            Ok(stat) => {
                tracing::debug!("Skipping {:?}: not a regular file ({:?})", path, stat.kind);
                return Ok(RenameOutcome::Skipped {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => {
                tracing::debug!("Skipping {:?}: {}", path, e);
                return Ok(RenameOutcome::Skipped {
                    path: path.to_path_buf(),
                });
            }
        };

        let birthtime = stat.time(TimeSource::Birthtime, path)?;
        let created = metadata::to_local(birthtime, path)?;
        if self.options.debug {
            on_event(RenameEvent::Birthtime {
                path,
                local: created,
            });
        }

        let filename = path
            .file_name()
            .ok_or_else(|| FileError::NoFileName(path.to_path_buf()))?;
        let date = created.format(DATE_FORMAT).to_string();
        let plan = plan_rename(filename, &date, self.options.remove_prefix);

        if self.options.set_modification_time {
            self.pin(path, birthtime, &created, on_event)?;
        }

        let Some(new_name) = plan.new_name else {
            tracing::debug!("{:?} already ends with {}, leaving name as is", path, date);
            return Ok(RenameOutcome::AlreadyDated {
                path: path.to_path_buf(),
            });
        };

        let target = path.with_file_name(&new_name);
        self.fs
            .rename(path, &target)
            .map_err(|e| FileError::fs(FsOperation::Rename, path, e))?;
        tracing::info!("Renamed {:?} -> {:?}", path, target);

        // Some filesystems bump mtime on rename
        if self.options.set_modification_time {
            self.pin(&target, birthtime, &created, on_event)?;
        }

        Ok(RenameOutcome::Renamed {
            from: path.to_path_buf(),
            to: target,
        })
    }

    fn pin(
        &self,
        path: &Path,
        birthtime: FileTime,
        created: &DateTime<Local>,
        on_event: &mut dyn FnMut(RenameEvent<'_>),
    ) -> FileResult<()> {
        on_event(RenameEvent::Pinning {
            path,
            stamp: created.format(PIN_FORMAT).to_string(),
        });
        self.fs
            .set_modified(path, metadata::whole_seconds(birthtime))
            .map_err(|e| FileError::fs(FsOperation::SetTimes, path, e))?;
        tracing::debug!("Pinned modification time of {:?}", path);
        Ok(())
    }
}
