//! TUI configuration persistence
//!
//! Refresh intervals, theme and logging preferences, stored as TOML.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory under ~/.config
const CONFIG_DIR_NAME: &str = "tourbus";

const LOG_FILE_NAME: &str = "tourbus-tui.log";

/// TUI configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// UI redraw interval
    pub tick_rate_ms: u64,

    /// Driver console telemetry interval
    pub driver_interval_ms: u64,

    /// Energy station telemetry interval
    pub energy_interval_ms: u64,

    /// Cleaning robot progress interval
    pub robot_interval_ms: u64,

    pub theme: ThemeChoice,

    /// Where to write the log; the terminal belongs to the UI
    pub log_file: Option<PathBuf>,

    /// Fixed RNG seed for reproducible telemetry
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Dark,
    HighContrast,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            driver_interval_ms: 3000,
            energy_interval_ms: 2000,
            robot_interval_ms: 2200,
            theme: ThemeChoice::Dark,
            log_file: None,
            seed: None,
        }
    }
}

impl TuiConfig {
    /// Get the configuration directory path
    pub fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg_config).join(CONFIG_DIR_NAME));
        }

        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
    }

    /// Get the full config file path
    pub fn config_file_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join(CONFIG_FILE_NAME))
    }

    /// Read a config file; `Ok(None)` when it does not exist
    pub fn read(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config = toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Ok(Some(config))
    }

    /// Load from `path` (or the default location), falling back to defaults
    ///
    /// The error, if any, is handed back so it can be logged once logging is
    /// up; its location depends on this very file.
    pub fn load_or_default(path: Option<&Path>) -> (Self, Option<ConfigError>) {
        let path = match path.map(Path::to_path_buf).or_else(Self::config_file_path) {
            Some(p) => p,
            None => return (Self::default(), None),
        };

        match Self::read(&path) {
            Ok(Some(config)) => (config, None),
            Ok(None) => (Self::default(), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_file_path().ok_or(ConfigError::NoConfigDir)?;
        self.save_to(&path)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| ConfigError::Io(e.to_string()))?;
            }
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?;
        fs::write(path, contents).map_err(|e| ConfigError::Io(e.to_string()))?;

        tracing::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Configured log file, or one under the user's cache directory
    pub fn log_path(&self) -> PathBuf {
        if let Some(path) = &self.log_file {
            return path.clone();
        }

        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(CONFIG_DIR_NAME)
            .join(LOG_FILE_NAME)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    pub fn driver_interval(&self) -> Duration {
        Duration::from_millis(self.driver_interval_ms)
    }

    pub fn energy_interval(&self) -> Duration {
        Duration::from_millis(self.energy_interval_ms)
    }

    pub fn robot_interval(&self) -> Duration {
        Duration::from_millis(self.robot_interval_ms)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid config file: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert_eq!(config.tick_rate(), Duration::from_millis(100));
        assert_eq!(config.driver_interval(), Duration::from_millis(3000));
        assert_eq!(config.energy_interval(), Duration::from_millis(2000));
        assert_eq!(config.robot_interval(), Duration::from_millis(2200));
        assert_eq!(config.theme, ThemeChoice::Dark);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_save_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);

        let config = TuiConfig {
            theme: ThemeChoice::HighContrast,
            seed: Some(7),
            log_file: Some(PathBuf::from("/tmp/bus.log")),
            ..TuiConfig::default()
        };
        config.save_to(&path).unwrap();

        let loaded = TuiConfig::read(&path).unwrap().unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "driver_interval_ms = 500\ntheme = \"high_contrast\"\n").unwrap();

        let loaded = TuiConfig::read(&path).unwrap().unwrap();
        assert_eq!(loaded.driver_interval_ms, 500);
        assert_eq!(loaded.theme, ThemeChoice::HighContrast);
        assert_eq!(loaded.energy_interval_ms, 2000);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        assert!(TuiConfig::read(&path).unwrap().is_none());
        let (config, error) = TuiConfig::load_or_default(Some(&path));
        assert_eq!(config, TuiConfig::default());
        assert!(error.is_none());
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "tick_rate_ms = \"fast\"").unwrap();

        let (config, error) = TuiConfig::load_or_default(Some(&path));
        assert_eq!(config, TuiConfig::default());
        assert!(matches!(error, Some(ConfigError::Parse(_))));
    }

    #[test]
    fn test_log_path_override() {
        let config = TuiConfig {
            log_file: Some(PathBuf::from("/var/log/bus.log")),
            ..TuiConfig::default()
        };
        assert_eq!(config.log_path(), PathBuf::from("/var/log/bus.log"));
        assert!(TuiConfig::default().log_path().ends_with(LOG_FILE_NAME));
    }
}
