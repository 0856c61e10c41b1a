use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "FILEDATE_CONFIG_DIR";

/// Find config directory by searching in priority order:
/// 1. Override from the --config flag (highest priority)
/// 2. Environment variable FILEDATE_CONFIG_DIR
/// 3. User config directory (`~/.config/filedate/` on Unix, `%APPDATA%\filedate\` on Windows)
///
/// The directory is not created; a missing one simply means default settings.
pub fn find_config_directory(override_dir: Option<&Path>) -> Result<PathBuf> {
    if let Some(override_path) = override_dir {
        tracing::debug!("Using config directory override: {:?}", override_path);
        return Ok(override_path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_DIR_ENV) {
        if !env_path.is_empty() {
            tracing::debug!("Using config directory from {}: {:?}", CONFIG_DIR_ENV, env_path);
            return Ok(PathBuf::from(env_path));
        }
    }

    get_user_config_dir()
}

/// Get platform-specific user config directory
/// - Windows: `%APPDATA%\filedate`
/// - Unix: `~/.config/filedate`
fn get_user_config_dir() -> Result<PathBuf> {
    let base_dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine user config directory"))?;
    Ok(base_dir.join("filedate"))
}

/// Get absolute path to settings.toml
pub fn get_app_config_path(override_dir: Option<&Path>) -> Result<PathBuf> {
    Ok(find_config_directory(override_dir)?.join("settings.toml"))
}

/// Directory for JSON log files (`<config dir>/logs`)
pub fn get_logs_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    Ok(find_config_directory(override_dir)?.join("logs"))
}

/// Report where settings are read from; call once the subscriber is installed
pub fn log_config_location(override_dir: Option<&Path>) {
    match get_app_config_path(override_dir) {
        Ok(path) => tracing::debug!("Settings file: {:?} (present: {})", path, path.exists()),
        Err(e) => tracing::debug!("No settings location: {:#}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_override_wins() {
        // SAFETY: serialized with every other test touching this variable
        unsafe { std::env::set_var(CONFIG_DIR_ENV, "/from/env") };
        let dir = find_config_directory(Some(Path::new("/from/flag"))).unwrap();
        unsafe { std::env::remove_var(CONFIG_DIR_ENV) };

        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    #[serial]
    fn test_env_var_used() {
        unsafe { std::env::set_var(CONFIG_DIR_ENV, "/from/env") };
        let path = get_app_config_path(None).unwrap();
        unsafe { std::env::remove_var(CONFIG_DIR_ENV) };

        assert_eq!(path, PathBuf::from("/from/env/settings.toml"));
    }

    #[test]
    fn test_logs_dir_under_config() {
        let logs = get_logs_dir(Some(Path::new("cfg"))).unwrap();
        assert_eq!(logs, PathBuf::from("cfg").join("logs"));
    }
}
