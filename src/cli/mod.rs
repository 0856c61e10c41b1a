use clap::Parser;
use std::path::PathBuf;

pub mod error;
pub mod handler;
pub mod output;

/// Rename files based on birth or creation date
#[derive(Parser, Debug)]
#[command(name = "date-rename")]
#[command(version, about, long_about = None)]
pub struct RenameCli {
    /// List of files to rename
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Remove existing numeric (e.g. year) prefix
    #[arg(short, long)]
    pub remove_prefix: bool,

    /// Set modification time to birth or creation time
    #[arg(short, long)]
    pub set_modification_time: bool,

    /// Print each file's birth time before processing it
    #[arg(short, long)]
    pub debug: bool,

    /// Report failures and continue with the remaining files
    #[arg(short, long)]
    pub keep_going: bool,

    /// Override config directory path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (TRACE level)
    #[arg(short, long)]
    pub verbose: bool,
}

/// Update modification time using birthtime or ctime
#[derive(Parser, Debug)]
#[command(name = "update-mtime")]
#[command(version, about, long_about = None)]
pub struct UpdateCli {
    /// Filename(s) to update modification time
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Use birthtime (creation time) to update modification time
    #[arg(short, long)]
    pub birthtime: bool,

    /// Use ctime (metadata change time) to update modification time
    #[arg(short, long)]
    pub ctime: bool,

    /// Override config directory path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (TRACE level)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        RenameCli::command().debug_assert();
        UpdateCli::command().debug_assert();
    }

    #[test]
    fn test_rename_short_flags() {
        let cli = RenameCli::try_parse_from(["date-rename", "-r", "-s", "-d", "a.jpg", "b.jpg"]).unwrap();
        assert!(cli.remove_prefix);
        assert!(cli.set_modification_time);
        assert!(cli.debug);
        assert!(!cli.keep_going);
        assert_eq!(cli.files, vec![PathBuf::from("a.jpg"), PathBuf::from("b.jpg")]);
    }

    #[test]
    fn test_rename_long_flags() {
        let cli = RenameCli::try_parse_from([
            "date-rename",
            "--remove-prefix",
            "--set-modification-time",
            "--keep-going",
            "a.jpg",
        ])
        .unwrap();
        assert!(cli.remove_prefix);
        assert!(cli.set_modification_time);
        assert!(cli.keep_going);
    }

    #[test]
    fn test_files_required() {
        assert!(RenameCli::try_parse_from(["date-rename", "-r"]).is_err());
        assert!(UpdateCli::try_parse_from(["update-mtime", "-b"]).is_err());
    }

    #[test]
    fn test_update_flags_parse_together() {
        // The conflict is reported by the tool, not rejected by the parser
        let cli = UpdateCli::try_parse_from(["update-mtime", "-b", "-c", "x"]).unwrap();
        assert!(cli.birthtime);
        assert!(cli.ctime);

        let cli = UpdateCli::try_parse_from(["update-mtime", "--ctime", "x"]).unwrap();
        assert!(!cli.birthtime);
        assert!(cli.ctime);
    }
}
