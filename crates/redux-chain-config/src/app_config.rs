//! Application configuration
//!
//! Configuration loaded from `.redux-chain.toml`.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Application configuration loaded from .redux-chain.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Middleware to install, outermost first
    #[serde(default = "default_middlewares")]
    pub middlewares: Vec<String>,

    /// Maximum nesting of re-entrant dispatch (0 = unbounded)
    #[serde(default = "default_max_dispatch_depth")]
    pub max_dispatch_depth: usize,

    /// Counter value the store starts with
    #[serde(default)]
    pub initial_value: i64,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Also write logs to a timestamped file in the cache directory
    #[serde(default)]
    pub log_to_file: bool,
}

fn default_middlewares() -> Vec<String> {
    ["logger1", "logger2", "logger3"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_max_dispatch_depth() -> usize {
    64
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            middlewares: default_middlewares(),
            max_dispatch_depth: default_max_dispatch_depth(),
            initial_value: 0,
            log_level: default_log_level(),
            log_to_file: false,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, then config dir
    ///
    /// Falls back to defaults when no file exists. A file that exists but
    /// does not parse is an error; the caller decides whether to continue.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_file_content(crate::load_config_file().as_deref())
    }

    /// Parse the content of a found config file, or use defaults for `None`
    pub fn from_file_content(content: Option<&str>) -> anyhow::Result<Self> {
        match content {
            Some(content) => {
                let config =
                    Self::from_toml_str(content).context("Failed to parse config file")?;
                log::info!("Loaded app config from file");
                Ok(config)
            }
            None => {
                log::debug!("Using default app config");
                Ok(Self::default())
            }
        }
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Depth limit for the store; `None` when configured as unbounded
    pub fn dispatch_depth_limit(&self) -> Option<usize> {
        match self.max_dispatch_depth {
            0 => None,
            limit => Some(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.middlewares, vec!["logger1", "logger2", "logger3"]);
        assert_eq!(config.max_dispatch_depth, 64);
        assert_eq!(config.initial_value, 0);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_to_file);
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            middlewares = ["audit", "logger1"]
            initial_value = 10
            log_level = "debug"
        "#;
        let config = AppConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.middlewares, vec!["audit", "logger1"]);
        assert_eq!(config.initial_value, 10);
        assert_eq!(config.log_level, "debug");
        // max_dispatch_depth should use default
        assert_eq!(config.max_dispatch_depth, 64);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_empty_middleware_list_is_kept() {
        let config = AppConfig::from_toml_str("middlewares = []").unwrap();
        assert!(config.middlewares.is_empty());
    }

    #[test]
    fn test_dispatch_depth_limit() {
        let config = AppConfig::from_toml_str("max_dispatch_depth = 0").unwrap();
        assert_eq!(config.dispatch_depth_limit(), None);
        assert_eq!(AppConfig::default().dispatch_depth_limit(), Some(64));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = AppConfig::from_file_content(None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_unparsable_file_is_reported() {
        let err = AppConfig::from_file_content(Some("initial_value = \"ten\"")).unwrap_err();
        assert!(format!("{:#}", err).starts_with("Failed to parse config file: "));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        assert!(AppConfig::from_toml_str("initial_value = \"ten\"").is_err());
    }
}
