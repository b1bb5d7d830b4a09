//! HTTP server settings

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest accepted request timeout, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Where the server listens and how it logs.
///
/// Every field has a default, so an empty environment yields a working
/// development server on `0.0.0.0:5000`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,

    /// Upper bound for a whole request, workflow call included
    pub request_timeout_secs: u64,

    /// Comma-separated allowed origins; empty allows any origin
    pub cors_origins: String,

    /// Raises this crate and `tower_http` to debug logging
    pub debug: bool,
}

/// Deployment environment. Production switches logs to JSON.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            environment: Environment::Development,
            log_level: "info,dinta=info,tower_http=info".to_string(),
            request_timeout_secs: 90,
            cors_origins: String::new(),
            debug: false,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Log filter directive, raised to debug when debug mode is on
    pub fn log_filter(&self) -> String {
        if self.debug {
            format!("{},dinta=debug,tower_http=debug", self.log_level)
        } else {
            self.log_level.clone()
        }
    }

    /// Non-empty, trimmed entries of `cors_origins`.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}
