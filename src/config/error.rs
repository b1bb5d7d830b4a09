//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid workflow service URL format")]
    InvalidOrchestrateUrl,

    #[error("Workflow service timeout must be between 1 and 60 seconds")]
    InvalidOrchestrateTimeout,

    #[error(
        "Request timeout ({request_secs}s) must exceed the workflow service timeout ({workflow_secs}s)"
    )]
    RequestTimeoutNotAboveWorkflow { request_secs: u64, workflow_secs: u64 },

    #[error("Minimum problem length must be greater than zero")]
    InvalidMinProblemLength,
}
