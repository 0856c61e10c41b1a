use crate::file::FileError;

// Exit codes for CLI automation
pub const SUCCESS: i32 = 0;
pub const ERROR: i32 = 1;
pub const INVALID_INPUT: i32 = 3;

/// Exit code for an error that ends a run
pub fn exit_code(error: &FileError) -> i32 {
    if error.is_usage_error() {
        INVALID_INPUT
    } else {
        ERROR
    }
}
