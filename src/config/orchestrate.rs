//! Workflow service (Orchestrate) configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Orchestrate workflow service configuration
///
/// The service is optional. Endpoints that would forward to it answer locally
/// unless both the URL and the API key are set.
#[derive(Debug, Clone, Deserialize)]
pub struct OrchestrateConfig {
    /// Workflow endpoint URL
    pub url: Option<String>,

    /// Bearer credential for the workflow endpoint
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl OrchestrateConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check if both URL and API key are present
    pub fn is_configured(&self) -> bool {
        self.url.as_ref().is_some_and(|u| !u.is_empty())
            && self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Validate workflow service configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = self.url.as_deref().filter(|u| !u.is_empty()) {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidOrchestrateUrl);
            }
        }

        if self.timeout_secs == 0 || self.timeout_secs > 60 {
            return Err(ValidationError::InvalidOrchestrateTimeout);
        }

        Ok(())
    }
}

impl Default for OrchestrateConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orchestrate_config_defaults() {
        let config = OrchestrateConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(!config.is_configured());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timeout_duration() {
        let config = OrchestrateConfig {
            timeout_secs: 60,
            ..Default::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_requires_both_url_and_key() {
        let url_only = OrchestrateConfig {
            url: Some("https://orchestrate.example.com/run".to_string()),
            ..Default::default()
        };
        assert!(!url_only.is_configured());

        let empty_key = OrchestrateConfig {
            api_key: Some(String::new()),
            ..url_only.clone()
        };
        assert!(!empty_key.is_configured());

        let both = OrchestrateConfig {
            api_key: Some("key".to_string()),
            ..url_only
        };
        assert!(both.is_configured());
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = OrchestrateConfig {
            url: Some("ftp://orchestrate.example.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidOrchestrateUrl));
    }

    #[test]
    fn test_validation_timeout_bounds() {
        let config = OrchestrateConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidOrchestrateTimeout)
        );

        let config = OrchestrateConfig {
            timeout_secs: 61,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
