//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `WorkflowService` - Port for the external analysis workflow

mod workflow_service;

pub use workflow_service::{WorkflowError, WorkflowService};
