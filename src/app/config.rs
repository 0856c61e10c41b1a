use anyhow::Context;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::filter::LevelFilter;

/// Optional settings shared by both tools (config/settings.toml).
///
/// Every key has a default, so an absent or partial file is fine.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub rename: RenameConfig,
    pub logging: LoggingConfig,
}

/// Defaults for `date-rename`; command-line flags can only switch these on
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RenameConfig {
    pub remove_prefix: bool,
    pub set_modification_time: bool,
    pub keep_going: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// off, error, warn, info, debug or trace
    pub level: String,
    /// Also write JSON logs under the config directory
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: false,
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> anyhow::Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid logging.level {:?}", self.level))
    }
}

impl Config {
    /// Load settings.toml from the resolved config directory
    pub fn load(config_dir_override: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = crate::util::paths::get_app_config_path(config_dir_override)?;
        Self::load_from(&config_path)
    }

    /// Load from an explicit file; a missing file yields the defaults
    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .context(format!("Failed to read {:?}", config_path))?;
        let config: Config = toml::from_str(&content)
            .context(format!("Failed to parse {:?}", config_path))?;
        config.logging.level_filter()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("settings.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.logging.level, "warn");
        assert!(!config.rename.remove_prefix);
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[rename]\nkeep_going = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert!(config.rename.keep_going);
        assert!(!config.rename.set_modification_time);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_full_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(
            &path,
            r#"
[rename]
remove_prefix = true
set_modification_time = true
keep_going = false

[logging]
level = "debug"
file = true
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();

        assert!(config.rename.remove_prefix);
        assert!(config.rename.set_modification_time);
        assert!(config.logging.file);
        assert_eq!(config.logging.level_filter().unwrap(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_invalid_level_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "[rename\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse"));
    }
}
