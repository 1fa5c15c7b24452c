//! Configuration management for Osprey.
//!
//! Provides TOML-based configuration with XDG-compliant paths and
//! environment variable overrides. Every check receives its configuration
//! explicitly; there is no process-wide mutable state.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration.
///
/// Loaded from `~/.config/osprey/config.toml` (or platform equivalent).
/// If the file doesn't exist, default values are used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OspreyConfig {
    /// Probe execution settings
    pub probe: ProbeConfig,
    /// Phone lookup settings
    pub phone: PhoneConfig,
}

impl OspreyConfig {
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
            Self::load_from(&config_path)
        } else {
            tracing::debug!("config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        tracing::debug!("loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `OSPREY_SITES_FILE`: Override the username site-list path
    /// - `OSPREY_DEFAULT_REGION`: Override the phone default region
    /// - `OSPREY_USER_AGENT`: Override the shared probe user agent
    pub fn load_with_env() -> ConfigResult<Self> {
        let mut config = Self::load()?;

        if let Ok(val) = std::env::var("OSPREY_SITES_FILE") {
            tracing::debug!("override sites_file from env: {}", val);
            config.probe.sites_file = PathBuf::from(val);
        }

        if let Ok(val) = std::env::var("OSPREY_DEFAULT_REGION") {
            tracing::debug!("override default_region from env: {}", val);
            config.phone.default_region = val;
        }

        if let Ok(val) = std::env::var("OSPREY_USER_AGENT") {
            tracing::debug!("override user_agent from env");
            config.probe.user_agent = val;
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
        tracing::debug!("saving config to {}", config_path.display());

        let contents = toml::to_string_pretty(self)?;
        fs::write(config_path, contents)?;
        Ok(())
    }

    /// Get the path to the configuration file.
    ///
    /// Uses XDG base directories: `~/.config/osprey/config.toml`
    pub fn config_path() -> ConfigResult<PathBuf> {
        let dirs = ProjectDirs::from("io", "osprey", "osprey").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }
}

/// Probe execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Per-request timeout for email-mode probes, in seconds
    pub email_timeout_secs: u64,
    /// Per-request timeout for username-mode probes, in seconds
    pub username_timeout_secs: u64,
    /// Per-request timeout for phone-mode probes, in seconds
    pub phone_timeout_secs: u64,
    /// User agent sent with username fan-out requests
    pub user_agent: String,
    /// Path to the username site-list file (one URL template per line)
    pub sites_file: PathBuf,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            email_timeout_secs: 12,
            username_timeout_secs: 10,
            phone_timeout_secs: 12,
            user_agent: "Mozilla/5.0 (compatible; osprey/0.1)".to_string(),
            sites_file: PathBuf::from("sites.txt"),
        }
    }
}

/// Phone lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneConfig {
    /// Default region for parsing numbers without a country code (ISO 3166-1)
    pub default_region: String,
    /// Calling code digits of the target region
    pub calling_code: String,
    /// Caller-ID lookup URL template with `{number}` and `{country_code}` slots
    pub lookup_url: String,
    /// Browser identity sent with caller-ID requests
    pub browser_user_agent: String,
    /// Referer sent with caller-ID requests
    pub referer: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            default_region: "SA".to_string(),
            calling_code: "966".to_string(),
            lookup_url:
                "http://caller-id.saedhamdan.com/index.php/UserManagement/search_number?number={number}&country_code={country_code}"
                    .to_string(),
            browser_user_agent:
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0 Safari/537.36"
                    .to_string(),
            referer: "http://caller-id.saedhamdan.com/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = OspreyConfig::default();
        assert_eq!(config.probe.email_timeout_secs, 12);
        assert_eq!(config.probe.username_timeout_secs, 10);
        assert_eq!(config.phone.default_region, "SA");
        assert_eq!(config.phone.calling_code, "966");
        assert!(config.phone.lookup_url.contains("{number}"));
        assert!(config.phone.lookup_url.contains("{country_code}"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[probe]
username_timeout_secs = 5
sites_file = "custom-sites.txt"

[phone]
default_region = "EG"
"#,
        )
        .expect("write config file");

        let config = OspreyConfig::load_from(&path).expect("load config");
        assert_eq!(config.probe.username_timeout_secs, 5);
        assert_eq!(config.probe.sites_file, PathBuf::from("custom-sites.txt"));
        assert_eq!(config.phone.default_region, "EG");
        // Unspecified fields keep defaults
        assert_eq!(config.probe.email_timeout_secs, 12);
        assert_eq!(config.phone.calling_code, "966");
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "not valid toml [[[").expect("write config file");

        let result = OspreyConfig::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let config = OspreyConfig::default();
        let serialized = toml::to_string_pretty(&config).expect("serialize config");
        let parsed: OspreyConfig = toml::from_str(&serialized).expect("parse config");
        assert_eq!(parsed.probe.user_agent, config.probe.user_agent);
        assert_eq!(parsed.phone.lookup_url, config.phone.lookup_url);
    }
}
