//! Workflow Service Port - Interface for the external analysis workflow.
//!
//! The workflow service is an opaque collaborator: JSON goes in, JSON comes
//! out. Adapters translate transport failures into [`WorkflowError`].
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoService;
//!
//! #[async_trait]
//! impl WorkflowService for EchoService {
//!     async fn run(&self, payload: serde_json::Value) -> Result<serde_json::Value, WorkflowError> {
//!         Ok(payload)
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Port for running a request through the external workflow.
#[async_trait]
pub trait WorkflowService: Send + Sync {
    /// Send a payload and return the parsed JSON response.
    ///
    /// Called once per request; failures are never retried.
    async fn run(&self, payload: Value) -> Result<Value, WorkflowError>;
}

/// Errors from the workflow service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Workflow request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Workflow returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Invalid workflow response: {0}")]
    InvalidResponse(String),

    #[error("Workflow client misconfigured: {0}")]
    Configuration(String),
}

impl WorkflowError {
    pub fn network(message: impl Into<String>) -> Self {
        WorkflowError::Network(message.into())
    }

    pub fn invalid_response(message: impl Into<String>) -> Self {
        WorkflowError::InvalidResponse(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_displays_seconds() {
        let err = WorkflowError::Timeout { timeout_secs: 30 };
        assert_eq!(err.to_string(), "Workflow request timed out after 30s");
    }

    #[test]
    fn upstream_status_displays_status_and_body() {
        let err = WorkflowError::UpstreamStatus {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Workflow returned status 502: bad gateway");
    }

    #[test]
    fn helpers_build_expected_variants() {
        assert_eq!(
            WorkflowError::network("refused"),
            WorkflowError::Network("refused".to_string())
        );
        assert_eq!(
            WorkflowError::invalid_response("not json"),
            WorkflowError::InvalidResponse("not json".to_string())
        );
    }
}
