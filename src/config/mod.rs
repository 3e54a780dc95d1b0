use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_DIR_NAME: &str = ".panedeck";
const CONFIG_FILE_NAME: &str = "config.json";
/// Overrides the config directory when set.
pub const CONFIG_DIR_ENV: &str = "PANEDECK_CONFIG_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config directory not found: could not determine home directory")]
    HomeDirNotFound,
    #[error("failed to read config file: {0}")]
    ReadFailed(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    ParseFailed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Title used for fresh app data and shown in the status bar.
    #[serde(default = "default_title")]
    pub title: String,

    /// Frame interval in milliseconds.
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    /// Mode the notes pane starts in ("view" or "edit").
    #[serde(default = "default_initial_mode")]
    pub initial_mode: String,
}

fn default_title() -> String {
    "Notes".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_initial_mode() -> String {
    "view".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate(),
            initial_mode: default_initial_mode(),
        }
    }
}

/// Return the config directory: `$PANEDECK_CONFIG_DIR` if set and non-empty,
/// otherwise `~/.panedeck/`.
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    config_dir_from(std::env::var_os(CONFIG_DIR_ENV))
}

fn config_dir_from(override_dir: Option<std::ffi::OsString>) -> Result<PathBuf, ConfigError> {
    if let Some(dir) = override_dir
        && !dir.is_empty()
    {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Return the config file path inside `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

impl Config {
    /// Load configuration from the given config directory.
    /// Returns defaults if the file does not exist.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let path = config_path(config_dir);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to the given config directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir)?;
        let path = config_path(config_dir);
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.title, "Notes");
        assert_eq!(config.tick_rate_ms, 250);
        assert_eq!(config.initial_mode, "view");
    }

    #[test]
    fn test_default_config_dir() {
        let dir = config_dir_from(None).expect("should return config dir");
        assert!(
            dir.ends_with(CONFIG_DIR_NAME),
            "should end with {}",
            CONFIG_DIR_NAME
        );
        assert!(dir.is_absolute(), "should be an absolute path");
    }

    #[test]
    fn test_config_dir_override() {
        let dir = config_dir_from(Some("/tmp/panedeck-alt".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/panedeck-alt"));

        // Empty override falls back to the home directory
        let dir = config_dir_from(Some("".into())).unwrap();
        assert!(dir.ends_with(CONFIG_DIR_NAME));
    }

    #[test]
    fn test_load_config_missing_file_returns_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load(tmp.path()).expect("should return defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_config_partial_json_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"{ "initial_mode": "edit" }"#,
        )
        .unwrap();

        let config = Config::load(tmp.path()).expect("should load config");
        assert_eq!(config.initial_mode, "edit");
        assert_eq!(config.title, "Notes");
        assert_eq!(config.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_config_invalid_json_returns_error() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join(CONFIG_FILE_NAME), "not json at all").unwrap();

        let result = Config::load(tmp.path());
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn test_save_config_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            title: "Journal".to_string(),
            tick_rate_ms: 100,
            initial_mode: "edit".to_string(),
        };

        config.save(tmp.path()).expect("should save config");
        assert!(tmp.path().join(CONFIG_FILE_NAME).exists());

        let loaded = Config::load(tmp.path()).expect("should load saved config");
        assert_eq!(config, loaded);
    }
}
