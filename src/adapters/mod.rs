//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum routes, DTOs and pages
//! - `orchestrate` - Workflow service client and mock

pub mod http;
pub mod orchestrate;

pub use orchestrate::{MockWorkflowService, OrchestrateClient, OrchestrateClientConfig};
