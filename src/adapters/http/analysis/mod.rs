//! HTTP adapter for the analysis engine.
//!
//! # Endpoints
//!
//! - `POST /api/analyze` (and `POST /analyze`) - Local framework analysis
//! - `POST /api/generate_analysis` - Title and key findings, workflow-backed when configured
//! - `POST /api/gemini-proxy` - Workflow pass-through wrapped as a candidate envelope

pub mod dto;
pub mod handlers;
pub mod routes;

// Re-export commonly used types
pub use handlers::AnalysisAppState;
pub use routes::analysis_router;
