//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DINTA` prefix and nested values use double underscores as separators.
//!
//! The flat variables `ORCHESTRATE_URL`, `ORCHESTRATE_API_KEY`, `PORT` and `DEBUG`
//! are also honored and take precedence over their prefixed equivalents.
//!
//! # Example
//!
//! ```no_run
//! use dinta::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod analysis;
mod error;
mod orchestrate;
mod server;

pub use analysis::AnalysisConfig;
pub use error::{ConfigError, ValidationError};
pub use orchestrate::OrchestrateConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;
use std::env;

/// Flat environment variables and the nested keys they override.
const LEGACY_OVERRIDES: &[(&str, &str)] = &[
    ("ORCHESTRATE_URL", "orchestrate.url"),
    ("ORCHESTRATE_API_KEY", "orchestrate.api_key"),
    ("PORT", "server.port"),
    ("DEBUG", "server.debug"),
];

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Workflow service configuration (optional)
    #[serde(default)]
    pub orchestrate: OrchestrateConfig,

    /// Analysis engine settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DINTA` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Applies the flat legacy variables on top
    ///
    /// # Environment Variable Format
    ///
    /// - `DINTA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `DINTA__ORCHESTRATE__URL=...` -> `orchestrate.url = ...`
    /// - `PORT=8080` -> `server.port = 8080`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        Self::from_env()
    }

    /// Load configuration from the current process environment only.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder().add_source(
            config::Environment::default()
                .prefix("DINTA")
                .separator("__"),
        );

        for (var, key) in LEGACY_OVERRIDES {
            let value = env::var(var).ok().filter(|v| !v.is_empty());
            builder = builder.set_override_option(*key, value)?;
        }

        let config = builder.build()?.try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.orchestrate.validate()?;
        self.analysis.validate()?;

        // Workflow timeouts must fire before the request timeout.
        if self.orchestrate.is_configured()
            && self.server.request_timeout_secs <= self.orchestrate.timeout_secs
        {
            return Err(ValidationError::RequestTimeoutNotAboveWorkflow {
                request_secs: self.server.request_timeout_secs,
                workflow_secs: self.orchestrate.timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ALL_VARS: &[&str] = &[
        "DINTA__SERVER__PORT",
        "DINTA__SERVER__ENVIRONMENT",
        "DINTA__SERVER__REQUEST_TIMEOUT_SECS",
        "DINTA__ORCHESTRATE__URL",
        "DINTA__ORCHESTRATE__API_KEY",
        "DINTA__ORCHESTRATE__TIMEOUT_SECS",
        "DINTA__ANALYSIS__MIN_PROBLEM_LENGTH",
        "DINTA__ANALYSIS__INTERPOLATE_INPUT",
        "ORCHESTRATE_URL",
        "ORCHESTRATE_API_KEY",
        "PORT",
        "DEBUG",
    ];

    /// Helper to clear environment variables before and after testing
    fn clear_env() {
        for var in ALL_VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::from_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(!config.orchestrate.is_configured());
        assert_eq!(config.analysis.min_problem_length, 25);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_variables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DINTA__SERVER__PORT", "3000");
        env::set_var("DINTA__ORCHESTRATE__URL", "https://orchestrate.example.com/run");
        env::set_var("DINTA__ORCHESTRATE__API_KEY", "key-123");
        env::set_var("DINTA__ANALYSIS__MIN_PROBLEM_LENGTH", "40");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.orchestrate.is_configured());
        assert_eq!(config.analysis.min_problem_length, 40);
    }

    #[test]
    fn test_legacy_variables_override_nested() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DINTA__SERVER__PORT", "3000");
        env::set_var("PORT", "8081");
        env::set_var("ORCHESTRATE_URL", "https://legacy.example.com/run");
        env::set_var("ORCHESTRATE_API_KEY", "legacy-key");
        env::set_var("DEBUG", "1");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 8081);
        assert!(config.server.debug);
        assert_eq!(
            config.orchestrate.url.as_deref(),
            Some("https://legacy.example.com/run")
        );
        assert_eq!(config.orchestrate.api_key.as_deref(), Some("legacy-key"));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DINTA__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_rejects_bad_workflow_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DINTA__ORCHESTRATE__TIMEOUT_SECS", "120");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidOrchestrateTimeout)
        );
    }

    #[test]
    fn test_validate_rejects_request_timeout_not_above_workflow_timeout() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("DINTA__SERVER__REQUEST_TIMEOUT_SECS", "1");
        env::set_var("ORCHESTRATE_URL", "https://orchestrate.example.com/run");
        env::set_var("ORCHESTRATE_API_KEY", "key");
        let result = AppConfig::from_env();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::RequestTimeoutNotAboveWorkflow {
                request_secs: 1,
                workflow_secs: 30,
            })
        );
    }

    #[test]
    fn test_short_request_timeout_allowed_without_workflow() {
        let mut config = AppConfig::default();
        config.server.request_timeout_secs = 1;
        assert!(config.validate().is_ok());

        config.orchestrate.url = Some("https://orchestrate.example.com/run".to_string());
        config.orchestrate.api_key = Some("key".to_string());
        config.server.request_timeout_secs = 31;
        assert!(config.validate().is_ok());
    }
}
