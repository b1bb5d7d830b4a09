//! HTTP handlers for analysis endpoints.
//!
//! These handlers connect Axum routes to the application layer handlers.
//! Malformed JSON on `/api/analyze` is a client error; the workflow-backed
//! endpoints treat a malformed body as empty.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::application::handlers::{
    AnalyzeProblemHandler, GenerateAnalysisCommand, GenerateAnalysisError,
    GenerateAnalysisHandler, ProxyWorkflowHandler,
};
use crate::domain::engine::AnalysisRequest;
use crate::ports::{WorkflowError, WorkflowService};

use super::dto::{
    AnalyzeRequest, CandidatesResponse, ErrorResponse, GenerateAnalysisRequest,
    GenerateAnalysisResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the analysis endpoints.
#[derive(Clone)]
pub struct AnalysisAppState {
    pub analyze: Arc<AnalyzeProblemHandler>,
    pub generate: Arc<GenerateAnalysisHandler>,
    pub proxy: Arc<ProxyWorkflowHandler>,
}

impl AnalysisAppState {
    /// Wires all handlers around one local engine and an optional workflow service.
    pub fn new(
        analyze: Arc<AnalyzeProblemHandler>,
        workflow: Option<Arc<dyn WorkflowService>>,
    ) -> Self {
        Self {
            generate: Arc::new(GenerateAnalysisHandler::new(
                workflow.clone(),
                analyze.clone(),
            )),
            proxy: Arc::new(ProxyWorkflowHandler::new(workflow)),
            analyze,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/analyze - Run the local analysis engine
pub async fn analyze(
    State(state): State<AnalysisAppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected analyze request body");
        AnalysisApiError::BadRequest(rejection.body_text())
    })?;

    let request: AnalysisRequest = body.into();
    let response = state.analyze.handle(&request);

    Ok(Json(response))
}

/// POST /api/generate_analysis - Title and key findings for the client view
pub async fn generate_analysis(
    State(state): State<AnalysisAppState>,
    payload: Result<Json<GenerateAnalysisRequest>, JsonRejection>,
) -> Response {
    let body = payload
        .map(|Json(body)| body)
        .unwrap_or_else(|rejection| {
            tracing::debug!(error = %rejection, "Unreadable generate_analysis body, treating as empty");
            GenerateAnalysisRequest::default()
        });
    let cmd: GenerateAnalysisCommand = body.into();

    match state.generate.handle(cmd).await {
        Ok(summary) => Json(GenerateAnalysisResponse::ok(summary.into())).into_response(),
        Err(GenerateAnalysisError::Workflow(err)) => {
            tracing::error!(error = %err, "Analysis generation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenerateAnalysisResponse::failed(err.to_string())),
            )
                .into_response()
        }
    }
}

/// POST /api/gemini-proxy - Forward a payload and wrap the result as a candidate
pub async fn gemini_proxy(
    State(state): State<AnalysisAppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AnalysisApiError> {
    let body = payload
        .map(|Json(body)| body)
        .unwrap_or_else(|_| Value::Object(Default::default()));

    let result = state.proxy.handle(body).await?;

    Ok(Json(CandidatesResponse::from_json(&result)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts handler errors to HTTP responses.
#[derive(Debug)]
pub enum AnalysisApiError {
    BadRequest(String),
    Internal(String),
}

impl From<WorkflowError> for AnalysisApiError {
    fn from(err: WorkflowError) -> Self {
        tracing::error!(error = %err, "Workflow proxy failed");
        AnalysisApiError::Internal(err.to_string())
    }
}

impl IntoResponse for AnalysisApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AnalysisApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AnalysisApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::orchestrate::MockWorkflowService;
    use serde_json::json;

    fn local_state() -> AnalysisAppState {
        AnalysisAppState::new(Arc::new(AnalyzeProblemHandler::default()), None)
    }

    #[test]
    fn state_shares_one_engine() {
        let analyze = Arc::new(AnalyzeProblemHandler::default());
        let state = AnalysisAppState::new(analyze.clone(), None);

        assert!(Arc::ptr_eq(&state.analyze, &analyze));
        assert!(state.proxy.is_simulated());
    }

    #[test]
    fn state_with_workflow_is_not_simulated() {
        let workflow = Arc::new(MockWorkflowService::new()) as Arc<dyn WorkflowService>;
        let state = AnalysisAppState::new(Arc::new(AnalyzeProblemHandler::default()), Some(workflow));

        assert!(!state.proxy.is_simulated());
    }

    #[tokio::test]
    async fn gemini_proxy_wraps_simulated_analysis() {
        let response = gemini_proxy(State(local_state()), Ok(Json(json!({}))))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn workflow_error_maps_to_internal() {
        let err: AnalysisApiError = WorkflowError::Timeout { timeout_secs: 30 }.into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_maps_to_400() {
        let response = AnalysisApiError::BadRequest("nope".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
