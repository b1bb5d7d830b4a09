//! ProxyWorkflowHandler - Forward an arbitrary payload to the workflow service

use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::engine::SOLUTION;
use crate::domain::framework::{template_for, FrameworkKey};
use crate::ports::{WorkflowError, WorkflowService};

/// Handler for pass-through workflow calls.
///
/// Without a configured workflow service a simulated SWOT analysis is
/// returned, so clients can be developed offline.
pub struct ProxyWorkflowHandler {
    workflow: Option<Arc<dyn WorkflowService>>,
}

impl ProxyWorkflowHandler {
    pub fn new(workflow: Option<Arc<dyn WorkflowService>>) -> Self {
        Self { workflow }
    }

    pub fn is_simulated(&self) -> bool {
        self.workflow.is_none()
    }

    /// Returns the workflow's JSON response for the payload.
    pub async fn handle(&self, payload: Value) -> Result<Value, WorkflowError> {
        match &self.workflow {
            Some(workflow) => {
                let request = json!({
                    "input": payload,
                    "meta": { "source": "gemini-proxy" },
                });
                workflow.run(request).await
            }
            None => {
                tracing::debug!("Workflow service not configured, returning simulated analysis");
                Ok(simulated_analysis())
            }
        }
    }
}

/// Offline stand-in for a workflow response, built from the SWOT template.
pub fn simulated_analysis() -> Value {
    let template = template_for(FrameworkKey::Swot);
    let sections: Vec<Value> = template
        .sections
        .iter()
        .map(|section| {
            json!({
                "title": section.name,
                "insights": section.insights,
            })
        })
        .collect();

    json!({
        "analyses": [{
            "framework_name": FrameworkKey::Swot.as_str(),
            "why_selected": "Auto-selected for illustrative purposes.",
            "decision": SOLUTION,
            "sections": sections,
        }]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::orchestrate::MockWorkflowService;

    #[tokio::test]
    async fn test_forwards_wrapped_payload() {
        let service = Arc::new(MockWorkflowService::new().with_response(json!({ "ok": true })));
        let handler = ProxyWorkflowHandler::new(Some(service.clone() as Arc<dyn WorkflowService>));

        let result = handler.handle(json!({ "contents": ["hi"] })).await;

        assert_eq!(result, Ok(json!({ "ok": true })));
        assert_eq!(
            service.calls(),
            vec![json!({
                "input": { "contents": ["hi"] },
                "meta": { "source": "gemini-proxy" }
            })]
        );
        assert!(!handler.is_simulated());
    }

    #[tokio::test]
    async fn test_surfaces_workflow_error() {
        let service = MockWorkflowService::new().with_error(WorkflowError::Timeout { timeout_secs: 30 });
        let handler = ProxyWorkflowHandler::new(Some(Arc::new(service) as Arc<dyn WorkflowService>));

        let result = handler.handle(json!({})).await;

        assert_eq!(result, Err(WorkflowError::Timeout { timeout_secs: 30 }));
    }

    #[tokio::test]
    async fn test_simulated_without_workflow() {
        let handler = ProxyWorkflowHandler::new(None);

        let result = handler.handle(json!({})).await.unwrap();

        assert!(handler.is_simulated());
        assert_eq!(result["analyses"][0]["framework_name"], "SWOT");
        assert_eq!(result["analyses"][0]["sections"].as_array().unwrap().len(), 4);
        assert_eq!(result["analyses"][0]["sections"][0]["title"], "Strengths");
    }

    #[test]
    fn test_simulated_analysis_is_stable() {
        assert_eq!(simulated_analysis(), simulated_analysis());
    }
}
