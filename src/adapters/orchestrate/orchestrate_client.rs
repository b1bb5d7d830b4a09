//! Orchestrate Client - Implementation of WorkflowService over HTTP.
//!
//! Posts the payload as JSON with a bearer credential and returns the parsed
//! JSON body. Every request is bounded by the configured timeout and is
//! never retried.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OrchestrateClientConfig::new("https://orchestrate.example.com/run", api_key)
//!     .with_timeout(Duration::from_secs(30));
//!
//! let client = OrchestrateClient::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use std::time::Duration;

use crate::ports::{WorkflowError, WorkflowService};

/// Configuration for the Orchestrate client.
#[derive(Debug, Clone)]
pub struct OrchestrateClientConfig {
    /// Workflow endpoint URL.
    pub url: String,
    /// Bearer credential.
    api_key: Secret<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl OrchestrateClientConfig {
    /// Creates a new configuration with a 30 second timeout.
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: Secret::new(api_key.into()),
            timeout: Duration::from_secs(30),
        }
    }

    /// Builds a client configuration from application settings.
    ///
    /// Returns `None` unless both the URL and the API key are set.
    pub fn from_settings(settings: &crate::config::OrchestrateConfig) -> Option<Self> {
        if !settings.is_configured() {
            return None;
        }
        let url = settings.url.clone()?;
        let api_key = settings.api_key.clone()?;
        Some(Self::new(url, api_key).with_timeout(settings.timeout()))
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// HTTP client for the Orchestrate workflow service.
pub struct OrchestrateClient {
    config: OrchestrateClientConfig,
    client: Client,
}

impl OrchestrateClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns `WorkflowError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: OrchestrateClientConfig) -> Result<Self, WorkflowError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| WorkflowError::Configuration(e.to_string()))?;

        Ok(Self { config, client })
    }

    fn map_transport_error(&self, e: reqwest::Error) -> WorkflowError {
        if e.is_timeout() {
            WorkflowError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            WorkflowError::network(format!("Connection failed: {}", e))
        } else {
            WorkflowError::network(e.to_string())
        }
    }

    async fn check_status(&self, response: Response) -> Result<Response, WorkflowError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(WorkflowError::UpstreamStatus {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl WorkflowService for OrchestrateClient {
    async fn run(&self, payload: Value) -> Result<Value, WorkflowError> {
        tracing::debug!(url = %self.config.url, "Calling workflow service");

        let response = self
            .client
            .post(&self.config.url)
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let response = self.check_status(response).await?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        serde_json::from_slice(&bytes).map_err(|e| WorkflowError::invalid_response(e.to_string()))
    }
}
