//! Analysis response returned by the engine.

use serde::Serialize;

use crate::domain::framework::{FrameworkKey, FrameworkOutput};

/// Outcome of an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    Success,
    NeedsInfo,
}

/// Engine response.
///
/// Either `needs_info` with clarifying questions, or `success` with the
/// framework fields populated. Unset fields are omitted from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResponse {
    pub status: AnalysisStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_problem: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_framework: Option<FrameworkKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework_output: Option<FrameworkOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_plan: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clarifying_questions: Option<Vec<String>>,
}

impl AnalysisResponse {
    /// Response asking the client for more detail.
    pub fn needs_info(questions: Vec<String>) -> Self {
        Self {
            status: AnalysisStatus::NeedsInfo,
            structured_problem: None,
            selected_framework: None,
            framework_output: None,
            solution: None,
            execution_plan: None,
            clarifying_questions: Some(questions),
        }
    }

    /// Response carrying a completed framework analysis.
    pub fn success(
        framework: FrameworkKey,
        structured_problem: String,
        framework_output: FrameworkOutput,
        solution: String,
        execution_plan: Vec<String>,
    ) -> Self {
        Self {
            status: AnalysisStatus::Success,
            structured_problem: Some(structured_problem),
            selected_framework: Some(framework),
            framework_output: Some(framework_output),
            solution: Some(solution),
            execution_plan: Some(execution_plan),
            clarifying_questions: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == AnalysisStatus::Success
    }
}
