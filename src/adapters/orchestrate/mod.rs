//! Workflow Service Adapters.
//!
//! - `OrchestrateClient` - HTTP client for the Orchestrate workflow endpoint
//! - `MockWorkflowService` - Queue-backed mock for testing

mod mock_service;
mod orchestrate_client;

pub use mock_service::MockWorkflowService;
pub use orchestrate_client::{OrchestrateClient, OrchestrateClientConfig};
