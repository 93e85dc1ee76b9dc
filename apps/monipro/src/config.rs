//! Configuration handling

use std::path::{Path, PathBuf};
use std::time::Duration;

use monipro_common::{DashboardError, Result};
use serde::{Deserialize, Serialize};

use crate::sim::DEFAULT_INTERVAL;

/// Dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Refresh interval in milliseconds
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,

    /// Title shown in the dashboard header
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_refresh_interval_ms() -> u64 {
    DEFAULT_INTERVAL.as_millis() as u64
}

fn default_title() -> String {
    "MoniPro".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_interval_ms: default_refresh_interval_ms(),
            title: default_title(),
        }
    }
}

impl Config {
    /// Load config from the default location, or return defaults when no
    /// file exists
    pub fn load() -> Result<Self> {
        Self::load_from_path(&Self::config_path())
    }

    /// Load from a specific path; a missing file yields defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        tracing::debug!("Loading config from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| DashboardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| DashboardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the dashboard cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.refresh_interval_ms == 0 {
            return Err(DashboardError::invalid_config(
                "refresh_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_interval_ms)
    }

    /// Get config file path
    pub fn config_path() -> PathBuf {
        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                dirs::home_dir()
                    .unwrap_or_else(|| PathBuf::from("/"))
                    .join(".config")
            });
        config_dir.join("monipro").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.refresh_interval_ms, 3000);
        assert_eq!(config.refresh_interval(), Duration::from_secs(3));
        assert_eq!(config.title, "MoniPro");
    }

    #[test]
    fn test_default_interval_follows_simulator() {
        assert_eq!(Config::default().refresh_interval(), DEFAULT_INTERVAL);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_path(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = write_config("refresh_interval_ms = 1500\n");
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.refresh_interval_ms, 1500);
        assert_eq!(config.title, "MoniPro");
    }

    #[test]
    fn test_full_file() {
        let file = write_config("refresh_interval_ms = 500\ntitle = \"Ops Wall\"\n");
        let config = Config::load_from_path(file.path()).unwrap();
        assert_eq!(config.refresh_interval(), Duration::from_millis(500));
        assert_eq!(config.title, "Ops Wall");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let file = write_config("refresh_interval_ms = \"soon\"\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, DashboardError::ConfigParse { .. }));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let file = write_config("refresh_interval_ms = 0\n");
        let err = Config::load_from_path(file.path()).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidConfig(_)));
    }

    #[test]
    fn test_config_path_ends_with_app_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("monipro/config.toml"));
    }
}
