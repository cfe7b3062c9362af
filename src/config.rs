//! SL client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the SL API client
///
/// Treated as immutable once a client is constructed; concurrent calls never
/// observe configuration changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlConfig {
    /// Base URL for the SL API. Must keep its trailing slash, otherwise
    /// client construction fails.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.sl.se/api2/".to_string()
}

fn default_user_agent() -> String {
    concat!("sl-transit/", env!("CARGO_PKG_VERSION")).to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for SlConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SlConfig {
    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if !self.base_url.ends_with('/') {
            return Err("base_url must end with a trailing slash".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SlConfig::default();
        assert_eq!(config.base_url, "https://api.sl.se/api2/");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.user_agent.starts_with("sl-transit/"));
    }

    #[test]
    fn test_testing_config() {
        let config = SlConfig::for_testing();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.base_url, "https://api.sl.se/api2/");
    }

    #[test]
    fn test_validation_success() {
        let config = SlConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_empty_base_url() {
        let config = SlConfig {
            base_url: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_trailing_slash() {
        let config = SlConfig {
            base_url: "https://api.sl.se/api2".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = SlConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = SlConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SlConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.base_url, config.base_url);
        assert_eq!(deserialized.timeout_secs, config.timeout_secs);
    }

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: SlConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "https://api.sl.se/api2/");
        assert_eq!(config.timeout_secs, 10);
    }
}
