use std::io::Write;

use super::error;
use super::output;
use super::{RenameCli, UpdateCli};
use crate::app::config::Config;
use crate::file::renamer::{RenameEvent, RenameOptions, Renamer};
use crate::file::updater::{UpdateOutcome, Updater};
use crate::file::FileSystem;

/// Combine command-line flags with settings-file defaults
pub fn rename_options(cli: &RenameCli, config: &Config) -> RenameOptions {
    RenameOptions {
        remove_prefix: cli.remove_prefix || config.rename.remove_prefix,
        set_modification_time: cli.set_modification_time || config.rename.set_modification_time,
        debug: cli.debug,
        keep_going: cli.keep_going || config.rename.keep_going,
    }
}

/// Run `date-rename` and return the exit code
pub fn handle_rename<F: FileSystem>(
    cli: &RenameCli,
    config: &Config,
    fs: &F,
    out: &mut impl Write,
    err: &mut impl Write,
) -> i32 {
    let options = rename_options(cli, config);
    tracing::debug!("Rename options: {:?}", options);

    // Console write failures are not worth aborting a rename over
    let result = Renamer::new(fs, options).run(&cli.files, |event| match event {
        RenameEvent::Birthtime { path, local } => {
            let _ = writeln!(out, "{}", output::format_birthtime(path, &local));
        }
        RenameEvent::Pinning { path, stamp } => {
            let _ = writeln!(out, "{}", output::format_pin(path, &stamp));
        }
        RenameEvent::Failed { error, .. } => {
            let _ = writeln!(err, "Error: {}", error);
        }
    });

    match result {
        Ok(summary) if summary.has_failures() => error::ERROR,
        Ok(_) => error::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            error::exit_code(&e)
        }
    }
}

/// Run `update-mtime` and return the exit code
pub fn handle_update<F: FileSystem>(cli: &UpdateCli, fs: &F, out: &mut impl Write) -> i32 {
    let updater = match Updater::from_flags(fs, cli.birthtime, cli.ctime) {
        Ok(updater) => updater,
        Err(e) => {
            tracing::debug!("Rejected mode flags: {}", e);
            let _ = writeln!(out, "{}", e);
            return error::exit_code(&e);
        }
    };
    tracing::debug!("Updating {} file(s) using {}", cli.files.len(), updater.source());

    updater.run(&cli.files, |outcome| {
        let line = match outcome {
            UpdateOutcome::Updated { path, source, .. } => output::format_updated(path, *source),
            UpdateOutcome::Failed { path, error } => output::format_update_failure(path, error),
        };
        let _ = writeln!(out, "{}", line);
    });

    // Missing or failed files are reported but do not change the exit code
    error::SUCCESS
}
