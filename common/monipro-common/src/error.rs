//! Error handling for the dashboard crates
//!
//! Snapshot generation, severity mapping and timer scheduling cannot fail.
//! Everything that can (config files, the terminal, serialization) funnels
//! into [`DashboardError`].

use std::path::PathBuf;

/// Error type for dashboard operations
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Config file exists but could not be read
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A config value is out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Terminal setup, drawing or teardown failed
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl DashboardError {
    /// Shorthand for [`DashboardError::InvalidConfig`]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        DashboardError::InvalidConfig(message.into())
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_message() {
        let err = DashboardError::invalid_config("refresh interval must be > 0");
        assert_eq!(
            err.to_string(),
            "invalid config: refresh interval must be > 0"
        );
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            let io: std::io::Result<()> =
                Err(std::io::Error::new(std::io::ErrorKind::Other, "no tty"));
            io?;
            Ok(())
        }
        let err = fails().unwrap_err();
        assert!(matches!(err, DashboardError::Terminal(_)));
        assert!(err.to_string().contains("no tty"));
    }

    #[test]
    fn test_config_read_includes_path() {
        let err = DashboardError::ConfigRead {
            path: PathBuf::from("/etc/monipro.toml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/etc/monipro.toml"));
    }
}
