//! Configuration handling for the wizard

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default author instance the wizard talks to
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:4502";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User configuration for the wizard
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WizardConfig {
    /// Base URL of the author instance
    pub server_url: Option<String>,
    /// Request timeout in seconds
    pub request_timeout_secs: Option<u64>,
}

#[allow(dead_code)]
impl WizardConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "confadmin", "confadmin-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: WizardConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Effective server base URL: env override, then config file, then default
    pub fn server_url(&self) -> String {
        std::env::var("CONFADMIN_SERVER")
            .ok()
            .or_else(|| self.server_url.clone())
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WizardConfig::default();
        assert!(config.server_url.is_none());
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn test_serialization() {
        let config = WizardConfig {
            server_url: Some("http://author.example.com:4502".to_string()),
            request_timeout_secs: Some(10),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: WizardConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.server_url,
            Some("http://author.example.com:4502".to_string())
        );
        assert_eq!(parsed.request_timeout_secs, Some(10));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: WizardConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.server_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"server_url": "http://x:4502", "unknown_field": "value"}"#;
        let parsed: WizardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.server_url, Some("http://x:4502".to_string()));
    }

    #[test]
    fn test_server_url_resolution() {
        // No env, no config: default
        std::env::remove_var("CONFADMIN_SERVER");
        let config = WizardConfig::default();
        assert_eq!(config.server_url(), DEFAULT_SERVER_URL);

        // Config file value wins over the default
        let config = WizardConfig {
            server_url: Some("http://configured:4502".to_string()),
            ..Default::default()
        };
        assert_eq!(config.server_url(), "http://configured:4502");

        // Env override wins over both
        std::env::set_var("CONFADMIN_SERVER", "http://override:4502");
        assert_eq!(config.server_url(), "http://override:4502");
        std::env::remove_var("CONFADMIN_SERVER");
    }

    #[test]
    fn test_request_timeout_default() {
        let config = WizardConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        let config = WizardConfig {
            request_timeout_secs: Some(5),
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = WizardConfig::config_path();
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = WizardConfig::load();
        assert!(result.is_ok());
    }
}
