#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use chrono::{DateTime, Local};
use filetime::FileTime;

/// Initialize logging once for all tests
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Create a small file named `name` inside `dir`
pub fn create_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"test content").unwrap();
    path
}

/// Creation time of `path`, or `None` when this filesystem does not record it
pub fn birthtime(path: &Path) -> Option<FileTime> {
    let metadata = std::fs::metadata(path).unwrap();
    FileTime::from_creation_time(&metadata)
}

pub fn modified(path: &Path) -> FileTime {
    FileTime::from_last_modification_time(&std::fs::metadata(path).unwrap())
}

pub fn accessed(path: &Path) -> FileTime {
    FileTime::from_last_access_time(&std::fs::metadata(path).unwrap())
}

/// `YYYY-MM-DD` of `time` in the local time zone
pub fn local_date(time: FileTime) -> String {
    DateTime::from_timestamp(time.unix_seconds(), time.nanoseconds())
        .unwrap()
        .with_timezone(&Local)
        .format("%Y-%m-%d")
        .to_string()
}

/// Sorted file names in `dir`
pub fn list_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    names.sort();
    names
}

/// Run a compiled binary against `config_dir`, flags before paths
pub fn run_bin(bin: &str, config_dir: &Path, flags: &[&str], paths: &[&Path]) -> Output {
    Command::new(bin)
        .arg("--config")
        .arg(config_dir)
        .args(flags)
        .args(paths)
        .output()
        .unwrap()
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
