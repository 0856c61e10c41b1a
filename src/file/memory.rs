//! In-memory `FileSystem` used by tests.
//!
//! Paths are matched literally; there is no normalisation and no symlinks.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use filetime::FileTime;

use super::fs::FileSystem;
use super::metadata::{FileKind, FileStat};

#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    entries: RefCell<BTreeMap<PathBuf, FileStat>>,
    failing: RefCell<BTreeSet<PathBuf>>,
    mutations: Cell<usize>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a regular file whose times all equal `birthtime`
    pub fn add_file(&self, path: impl Into<PathBuf>, birthtime: FileTime) -> &Self {
        self.insert(path, FileKind::File, Some(birthtime), Some(birthtime))
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) -> &Self {
        let now = FileTime::now();
        self.insert(path, FileKind::Dir, Some(now), Some(now))
    }

    /// Add an entry with full control over which times are exposed
    pub fn insert(
        &self,
        path: impl Into<PathBuf>,
        kind: FileKind,
        birthtime: Option<FileTime>,
        changed: Option<FileTime>,
    ) -> &Self {
        let modified = birthtime.or(changed).unwrap_or_else(FileTime::zero);
        self.entries.borrow_mut().insert(
            path.into(),
            FileStat {
                kind,
                birthtime,
                changed,
                modified,
                accessed: modified,
            },
        );
        self
    }

    /// Make every mutating call on `path` fail with `PermissionDenied`
    pub fn fail_on(&self, path: impl Into<PathBuf>) -> &Self {
        self.failing.borrow_mut().insert(path.into());
        self
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<FileStat> {
        self.entries.borrow().get(path.as_ref()).copied()
    }

    pub fn exists(&self, path: impl AsRef<Path>) -> bool {
        self.entries.borrow().contains_key(path.as_ref())
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.borrow().keys().cloned().collect()
    }

    /// Number of successful rename and timestamp-set calls
    pub fn mutations(&self) -> usize {
        self.mutations.get()
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.failing.borrow().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }
        Ok(())
    }

    fn update(&self, path: &Path, apply: impl FnOnce(&mut FileStat)) -> io::Result<()> {
        self.check_writable(path)?;
        let mut entries = self.entries.borrow_mut();
        let stat = entries.get_mut(path).ok_or_else(|| not_found(path))?;
        apply(stat);
        self.mutations.set(self.mutations.get() + 1);
        Ok(())
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{}: no such file or directory", path.display()),
    )
}

impl FileSystem for MemoryFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        self.get(path).ok_or_else(|| not_found(path))
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        self.check_writable(from)?;
        let mut entries = self.entries.borrow_mut();
        let stat = entries.remove(from).ok_or_else(|| not_found(from))?;
        // Same as rename(2): an existing target is replaced
        entries.insert(to.to_path_buf(), stat);
        self.mutations.set(self.mutations.get() + 1);
        Ok(())
    }

    fn set_modified(&self, path: &Path, mtime: FileTime) -> io::Result<()> {
        self.update(path, |stat| stat.modified = mtime)
    }

    fn set_times(&self, path: &Path, atime: FileTime, mtime: FileTime) -> io::Result<()> {
        self.update(path, |stat| {
            stat.accessed = atime;
            stat.modified = mtime;
        })
    }
}
