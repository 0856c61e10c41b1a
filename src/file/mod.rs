pub mod error;
pub mod fs;
pub mod memory;
pub mod metadata;
pub mod naming;
pub mod renamer;
pub mod updater;

pub use error::{FileError, FileResult};
pub use fs::{FileSystem, OsFileSystem};
pub use renamer::{RenameOptions, Renamer};
pub use updater::Updater;
