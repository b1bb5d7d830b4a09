//! GenerateAnalysisHandler - Produce a titled list of key findings
//!
//! Forwards to the workflow service when one is configured and reshapes its
//! response; otherwise derives the findings from the local engine.

use std::sync::Arc;

use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::engine::{AnalysisRequest, AnalysisResponse};
use crate::ports::{WorkflowError, WorkflowService};

use super::analyze_problem::AnalyzeProblemHandler;

/// Title used when the workflow response has no recommended direction.
pub const DEFAULT_ANALYSIS_TITLE: &str = "Strategic Analysis";

/// Title used when the local engine needs more information.
pub const NEEDS_INFO_TITLE: &str = "More Information Needed";

/// Command to generate an analysis summary
#[derive(Debug, Clone)]
pub struct GenerateAnalysisCommand {
    pub problem: String,
    pub assumptions: String,
    /// Framework selection as sent by the client: a name, a list of names, or absent.
    pub frameworks: Value,
}

impl GenerateAnalysisCommand {
    /// Framework name for the local engine: the string itself, or the first
    /// string in a list, else `"auto"`.
    pub fn framework_selector(&self) -> &str {
        match &self.frameworks {
            Value::String(name) => name.as_str(),
            Value::Array(items) => items.iter().find_map(Value::as_str).unwrap_or("auto"),
            _ => "auto",
        }
    }
}

/// Title and findings shown by the client
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSummary {
    pub title: String,
    pub key_findings: Vec<Value>,
}

/// Error type for generating an analysis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateAnalysisError {
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

/// Handler for analysis summaries
pub struct GenerateAnalysisHandler {
    workflow: Option<Arc<dyn WorkflowService>>,
    local: Arc<AnalyzeProblemHandler>,
}

impl GenerateAnalysisHandler {
    pub fn new(
        workflow: Option<Arc<dyn WorkflowService>>,
        local: Arc<AnalyzeProblemHandler>,
    ) -> Self {
        Self { workflow, local }
    }

    pub async fn handle(
        &self,
        cmd: GenerateAnalysisCommand,
    ) -> Result<AnalysisSummary, GenerateAnalysisError> {
        match &self.workflow {
            Some(workflow) => {
                let payload = json!({
                    "problem": cmd.problem,
                    "assumptions": cmd.assumptions,
                    "frameworks": cmd.frameworks,
                    "meta": { "caller": "generate_analysis" },
                });

                let response = workflow.run(payload).await.map_err(|e| {
                    tracing::warn!("Workflow service failed: {}", e);
                    e
                })?;

                Ok(summary_from_workflow(&response))
            }
            None => {
                let request = AnalysisRequest::new(
                    cmd.problem.clone(),
                    cmd.assumptions.clone(),
                    cmd.framework_selector(),
                );
                Ok(summary_from_local(&self.local.handle(&request)))
            }
        }
    }
}

/// Reshapes a workflow response into a summary.
///
/// Title comes from `solution.recommended_direction`; findings from
/// `solution.key_decisions`, else `framework_output.insights`, else empty.
pub fn summary_from_workflow(response: &Value) -> AnalysisSummary {
    let title = response
        .pointer("/solution/recommended_direction")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_ANALYSIS_TITLE)
        .to_string();

    let key_findings = response
        .pointer("/solution/key_decisions")
        .and_then(Value::as_array)
        .or_else(|| {
            response
                .pointer("/framework_output/insights")
                .and_then(Value::as_array)
        })
        .cloned()
        .unwrap_or_default();

    AnalysisSummary {
        title,
        key_findings,
    }
}

/// Flattens a local engine response into a summary.
pub fn summary_from_local(response: &AnalysisResponse) -> AnalysisSummary {
    match (&response.selected_framework, &response.framework_output) {
        (Some(key), Some(output)) => AnalysisSummary {
            title: format!("Analysis: {}", key.display_name()),
            key_findings: output
                .iter()
                .flat_map(|(section, insights)| {
                    insights
                        .iter()
                        .map(move |insight| Value::String(format!("{}: {}", section, insight)))
                })
                .collect(),
        },
        _ => AnalysisSummary {
            title: NEEDS_INFO_TITLE.to_string(),
            key_findings: response
                .clarifying_questions
                .iter()
                .flatten()
                .cloned()
                .map(Value::String)
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::orchestrate::MockWorkflowService;

    const PROBLEM: &str = "Our main competitor just launched a cheaper rival product";

    fn command(frameworks: Value) -> GenerateAnalysisCommand {
        GenerateAnalysisCommand {
            problem: PROBLEM.to_string(),
            assumptions: "Prices are public".to_string(),
            frameworks,
        }
    }

    fn local_only() -> GenerateAnalysisHandler {
        GenerateAnalysisHandler::new(None, Arc::new(AnalyzeProblemHandler::default()))
    }

    #[test]
    fn test_framework_selector_from_string_list_or_missing() {
        assert_eq!(command(json!("RICE")).framework_selector(), "RICE");
        assert_eq!(command(json!([1, "5WHYS", "SWOT"])).framework_selector(), "5WHYS");
        assert_eq!(command(json!([])).framework_selector(), "auto");
        assert_eq!(command(Value::Null).framework_selector(), "auto");
    }

    #[tokio::test]
    async fn test_local_summary_flattens_sections() {
        let summary = local_only().handle(command(json!("SWOT"))).await.unwrap();

        assert_eq!(summary.title, "Analysis: SWOT Analysis");
        assert_eq!(summary.key_findings.len(), 8);
        assert_eq!(summary.key_findings[0], json!("Strengths: Internal expertise"));
        assert_eq!(summary.key_findings[7], json!("Threats: High competition"));
    }

    #[tokio::test]
    async fn test_local_summary_for_short_problem_lists_questions() {
        let cmd = GenerateAnalysisCommand {
            problem: "too short".to_string(),
            assumptions: String::new(),
            frameworks: Value::Null,
        };

        let summary = local_only().handle(cmd).await.unwrap();

        assert_eq!(summary.title, NEEDS_INFO_TITLE);
        assert_eq!(summary.key_findings.len(), 3);
    }

    #[tokio::test]
    async fn test_workflow_payload_and_reshape() {
        let service = Arc::new(MockWorkflowService::new().with_response(json!({
            "solution": {
                "recommended_direction": "Compete on service, not price",
                "key_decisions": ["Keep pricing", "Launch loyalty program"]
            }
        })));
        let handler = GenerateAnalysisHandler::new(
            Some(service.clone() as Arc<dyn WorkflowService>),
            Arc::new(AnalyzeProblemHandler::default()),
        );

        let summary = handler.handle(command(json!(["PORTERS_FIVE"]))).await.unwrap();

        assert_eq!(summary.title, "Compete on service, not price");
        assert_eq!(
            summary.key_findings,
            vec![json!("Keep pricing"), json!("Launch loyalty program")]
        );
        assert_eq!(
            service.calls(),
            vec![json!({
                "problem": PROBLEM,
                "assumptions": "Prices are public",
                "frameworks": ["PORTERS_FIVE"],
                "meta": { "caller": "generate_analysis" }
            })]
        );
    }

    #[tokio::test]
    async fn test_workflow_error_is_surfaced() {
        let service = MockWorkflowService::new().with_error(WorkflowError::UpstreamStatus {
            status: 503,
            body: "maintenance".to_string(),
        });
        let handler = GenerateAnalysisHandler::new(
            Some(Arc::new(service) as Arc<dyn WorkflowService>),
            Arc::new(AnalyzeProblemHandler::default()),
        );

        let result = handler.handle(command(json!("auto"))).await;

        assert!(matches!(
            result,
            Err(GenerateAnalysisError::Workflow(WorkflowError::UpstreamStatus { status: 503, .. }))
        ));
    }

    #[test]
    fn test_summary_from_workflow_falls_back_to_insights() {
        let summary = summary_from_workflow(&json!({
            "framework_output": { "insights": ["Insight A", "Insight B"] }
        }));

        assert_eq!(summary.title, DEFAULT_ANALYSIS_TITLE);
        assert_eq!(summary.key_findings, vec![json!("Insight A"), json!("Insight B")]);
    }

    #[test]
    fn test_summary_from_workflow_defaults_when_empty() {
        let summary = summary_from_workflow(&json!({}));

        assert_eq!(summary.title, DEFAULT_ANALYSIS_TITLE);
        assert!(summary.key_findings.is_empty());
    }
}
