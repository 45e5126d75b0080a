//! Configuration management for netscry.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. The worker cap and probe timeout are
//! fixed constants of the search engine and deliberately absent here.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main application configuration.
///
/// Loaded from `~/.config/netscry/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog and agent file locations
    pub catalogs: CatalogsConfig,
    /// Presentation defaults
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults if not found.
    ///
    /// # Errors
    /// Returns error if:
    /// - Config directory cannot be determined
    /// - File exists but cannot be read
    /// - File contents are not valid TOML
    pub fn load() -> ConfigResult<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            tracing::debug!("Loading config from {}", config_path.display());
            let contents = fs::read_to_string(&config_path)?;
            let config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            tracing::debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `NETSCRY_USERNAMES_FILE`: Override the username catalog path
    /// - `NETSCRY_PHONE_NUMBERS_FILE`: Override the phone-number catalog path
    /// - `NETSCRY_USER_AGENTS_FILE`: Override the user-agent list path
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        // Override from environment
        if let Ok(val) = std::env::var("NETSCRY_USERNAMES_FILE") {
            tracing::debug!("Override catalogs.usernames from env: {}", val);
            config.catalogs.usernames = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("NETSCRY_PHONE_NUMBERS_FILE") {
            tracing::debug!("Override catalogs.phone_numbers from env: {}", val);
            config.catalogs.phone_numbers = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("NETSCRY_USER_AGENTS_FILE") {
            tracing::debug!("Override catalogs.user_agents from env: {}", val);
            config.catalogs.user_agents = PathBuf::from(val);
        }

        Ok(config)
    }

    /// Save configuration to disk.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> ConfigResult<()> {
        let config_path = Self::config_path()?;
        let config_dir = config_path
            .parent()
            .ok_or_else(|| ConfigError::InvalidValue {
                field: "config_path".to_string(),
                reason: "no parent directory".to_string(),
            })?;

        fs::create_dir_all(config_dir)?;
        tracing::debug!("Saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/netscry/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs =
            ProjectDirs::from("io", "netscry", "netscry").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Locations of the catalog and user-agent files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogsConfig {
    /// Site catalog searched by username
    pub usernames: PathBuf,
    /// Site catalog searched by phone number
    pub phone_numbers: PathBuf,
    /// Newline-delimited `User-Agent` list
    pub user_agents: PathBuf,
}

impl Default for CatalogsConfig {
    fn default() -> Self {
        Self {
            usernames: PathBuf::from("catalogs/usernames.json"),
            phone_numbers: PathBuf::from("catalogs/phonenumbers.json"),
            user_agents: PathBuf::from("catalogs/user_agents.txt"),
        }
    }
}

/// Presentation defaults for the CLI consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default path for the exported HTML report
    pub report_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from("netscry_results.html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.catalogs.usernames,
            PathBuf::from("catalogs/usernames.json")
        );
        assert_eq!(
            config.catalogs.phone_numbers,
            PathBuf::from("catalogs/phonenumbers.json")
        );
        assert_eq!(
            config.catalogs.user_agents,
            PathBuf::from("catalogs/user_agents.txt")
        );
        assert_eq!(config.output.report_path, PathBuf::from("netscry_results.html"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [catalogs]
            usernames = "/tmp/custom.json"
            "#,
        )
        .expect("parse partial config");

        assert_eq!(config.catalogs.usernames, PathBuf::from("/tmp/custom.json"));
        // Unspecified fields fall back to defaults
        assert_eq!(
            config.catalogs.user_agents,
            PathBuf::from("catalogs/user_agents.txt")
        );
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let serialized = toml::to_string_pretty(&config).expect("serialize config");
        let parsed: AppConfig = toml::from_str(&serialized).expect("reparse config");
        assert_eq!(parsed.catalogs.usernames, config.catalogs.usernames);
        assert_eq!(parsed.output.report_path, config.output.report_path);
    }

}
