//! HTTP DTOs for analysis endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! The camelCase shapes match what the browser client already sends and parses.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::application::handlers::{AnalysisSummary, GenerateAnalysisCommand};
use crate::domain::engine::AnalysisRequest;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request body for `POST /api/analyze`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
    pub problem: String,
    #[serde(default)]
    pub assumptions: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
}

impl From<AnalyzeRequest> for AnalysisRequest {
    fn from(req: AnalyzeRequest) -> Self {
        AnalysisRequest::new(
            req.problem,
            req.assumptions.unwrap_or_default(),
            req.framework.as_deref().unwrap_or("auto"),
        )
    }
}

/// Request body for `POST /api/generate_analysis`.
///
/// Empty values fall through to the next alternative field. Text fields of
/// the wrong JSON type are read as absent instead of rejecting the body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAnalysisRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub problem_statement: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub user_query: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub assumptions: Option<String>,
    #[serde(default)]
    pub selected_frameworks: Option<Value>,
    #[serde(default)]
    pub framework: Option<Value>,
}

impl From<GenerateAnalysisRequest> for GenerateAnalysisCommand {
    fn from(req: GenerateAnalysisRequest) -> Self {
        let problem = req
            .problem_statement
            .filter(|s| !s.is_empty())
            .or(req.user_query.filter(|s| !s.is_empty()))
            .unwrap_or_default();

        let frameworks = req
            .selected_frameworks
            .filter(is_present)
            .or(req.framework.filter(is_present))
            .unwrap_or_else(|| Value::String("auto".to_string()));

        GenerateAnalysisCommand {
            problem,
            assumptions: req.assumptions.unwrap_or_default(),
            frameworks,
        }
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Null, empty strings and empty collections count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        _ => true,
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Title and findings for the analysis view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisData {
    pub analysis_title: String,
    pub key_findings: Vec<Value>,
}

impl From<AnalysisSummary> for AnalysisData {
    fn from(summary: AnalysisSummary) -> Self {
        Self {
            analysis_title: summary.title,
            key_findings: summary.key_findings,
        }
    }
}

/// Response for `POST /api/generate_analysis`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateAnalysisResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_data: Option<AnalysisData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateAnalysisResponse {
    pub fn ok(data: AnalysisData) -> Self {
        Self {
            success: true,
            analysis_data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            analysis_data: None,
            error: Some(error.into()),
        }
    }
}

/// Candidate envelope returned by `POST /api/gemini-proxy`.
///
/// `{ "candidates": [ { "content": { "parts": [ { "text": "..." } ] } } ] }`
#[derive(Debug, Clone, Serialize)]
pub struct CandidatesResponse {
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub content: CandidateContent,
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateContent {
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentPart {
    pub text: String,
}

impl CandidatesResponse {
    /// Wraps a JSON payload, serialized to text, in a single candidate.
    pub fn from_json(payload: &Value) -> Self {
        Self {
            candidates: vec![Candidate {
                content: CandidateContent {
                    parts: vec![ContentPart {
                        text: payload.to_string(),
                    }],
                },
            }],
        }
    }
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
