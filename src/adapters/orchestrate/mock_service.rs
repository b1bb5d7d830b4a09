//! Mock Workflow Service for testing.
//!
//! Returns queued responses in order and records every payload it receives,
//! so handlers can be tested without a running workflow endpoint.
//!
//! # Example
//!
//! ```ignore
//! let service = MockWorkflowService::new()
//!     .with_response(json!({ "solution": { "recommended_direction": "Expand" } }));
//!
//! let result = service.run(json!({ "problem": "..." })).await?;
//! assert_eq!(service.calls().len(), 1);
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{WorkflowError, WorkflowService};

/// Mock workflow service.
#[derive(Debug, Clone, Default)]
pub struct MockWorkflowService {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<Result<Value, WorkflowError>>>>,
    /// Payloads received, for verification.
    calls: Arc<Mutex<Vec<Value>>>,
}

impl MockWorkflowService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, response: Value) -> Self {
        self.push(Ok(response));
        self
    }

    /// Adds an error response to the queue.
    pub fn with_error(self, error: WorkflowError) -> Self {
        self.push(Err(error));
        self
    }

    /// Returns the payloads received so far.
    pub fn calls(&self) -> Vec<Value> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    fn push(&self, response: Result<Value, WorkflowError>) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.push_back(response);
        }
    }
}

#[async_trait]
impl WorkflowService for MockWorkflowService {
    async fn run(&self, payload: Value) -> Result<Value, WorkflowError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(payload);
        }

        self.responses
            .lock()
            .map_err(|_| WorkflowError::network("mock state poisoned"))?
            .pop_front()
            .unwrap_or_else(|| Err(WorkflowError::network("no mock response configured")))
    }
}
