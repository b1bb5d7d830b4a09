//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod analyze_problem;
pub mod generate_analysis;
pub mod proxy_workflow;

pub use analyze_problem::AnalyzeProblemHandler;
pub use generate_analysis::{
    summary_from_local, summary_from_workflow, AnalysisSummary, GenerateAnalysisCommand,
    GenerateAnalysisError, GenerateAnalysisHandler, DEFAULT_ANALYSIS_TITLE, NEEDS_INFO_TITLE,
};
pub use proxy_workflow::{simulated_analysis, ProxyWorkflowHandler};
