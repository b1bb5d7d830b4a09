//! Route configuration for analysis endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{analyze, gemini_proxy, generate_analysis, AnalysisAppState};

/// Creates the analysis router with all endpoints.
///
/// Routes:
/// - `POST /api/analyze` - Validate and apply a decision framework
/// - `POST /analyze` - Same engine, kept for older clients
/// - `POST /api/generate_analysis` - Title and key findings
/// - `POST /api/gemini-proxy` - Workflow pass-through in candidate form
pub fn analysis_router() -> Router<AnalysisAppState> {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/analyze", post(analyze))
        .route("/api/generate_analysis", post(generate_analysis))
        .route("/api/gemini-proxy", post(gemini_proxy))
}
