//! Card Configuration
//!
//! The card reads one setting: the base URL of the remote SIM Manager
//! service. It is read once at construction and immutable for the card's
//! lifetime. A missing URL is legal; the card is then constructed but
//! every challenge fails fast with `NotConfigured`.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Default connect timeout for SIM Manager requests, in seconds
const DEFAULT_CONNECT_TIMEOUT: u64 = 5;
/// Default request timeout for SIM Manager requests, in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    ParseError(#[from] serde_yaml::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// SIM Manager card configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CardConfig {
    /// Base URL of the remote SIM Manager service
    pub sim_url: Option<String>,
    /// Connect timeout in seconds
    pub connect_timeout: u64,
    /// Request timeout in seconds
    pub request_timeout: u64,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            sim_url: None,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigDocument {
    #[serde(default)]
    card: CardConfig,
}

impl CardConfig {
    /// Create a configuration pointing at a SIM Manager URL
    pub fn with_sim_url(sim_url: impl Into<String>) -> Self {
        Self {
            sim_url: Some(sim_url.into()),
            ..Default::default()
        }
    }

    /// Parse configuration from a YAML document under the `card:` section
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let doc: ConfigDocument = serde_yaml::from_str(yaml)?;
        Ok(doc.card)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Connect timeout as a [`Duration`]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CardConfig::default();
        assert!(config.sim_url.is_none());
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
card:
  sim_url: http://sim-manager.example.org:8080
  request_timeout: 10
"#;
        let config = CardConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.sim_url.as_deref(),
            Some("http://sim-manager.example.org:8080")
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_from_yaml_without_sim_url() {
        let config = CardConfig::from_yaml_str("card: {}").unwrap();
        assert!(config.sim_url.is_none());

        // An empty document is also a valid (unconfigured) card
        let config = CardConfig::from_yaml_str("{}").unwrap();
        assert!(config.sim_url.is_none());
    }

    #[test]
    fn test_from_yaml_rejects_malformed() {
        assert!(CardConfig::from_yaml_str("card: [not, a, mapping]").is_err());
    }
}
