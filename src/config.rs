use std::path::Path;

use anyhow::{Context, Result};
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// Environment variables with this prefix override file settings,
/// e.g. `LOCATION_LOG_LEVEL=debug`.
pub const ENV_PREFIX: &str = "LOCATION";

/// Configuration for the `location` command-line tool
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LocationConfig {
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,

    /// Directory for log files; logs go to stderr when unset
    pub log_dir: Option<String>,

    /// Print results as JSON instead of text
    pub json: bool,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: None,
            json: false,
        }
    }
}

impl LocationConfig {
    /// Loads configuration from an optional TOML file, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }
        builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_sources() {
        let config = LocationConfig::load(None).expect("Failed to load defaults");
        assert_eq!(config.log_level, LocationConfig::default().log_level);
        assert!(!config.json);
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("url_location_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("location.toml");
        fs::write(&path, "log_level = \"debug\"\njson = true\n").unwrap();

        let config = LocationConfig::load(Some(&path)).unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.json);
        assert_eq!(config.log_dir, None);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let path = Path::new("/nonexistent/location.toml");
        let err = LocationConfig::load(Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to read configuration"));
    }
}
