//! Framework dispatch - resolves a framework key and assembles the analysis.

use crate::domain::framework::{
    template_for, FrameworkKey, FrameworkOutput, FrameworkSelector, KeywordFrameworkSelector,
};

use super::request::FrameworkSelection;
use super::response::AnalysisResponse;

/// Recommendation returned with every successful analysis.
pub const SOLUTION: &str = "Implement a phased rollout starting with a Minimum Viable Product (MVP) to gather real-world data before full commitment.";

/// Execution plan returned with every successful analysis.
pub const EXECUTION_PLAN: &[&str] = &[
    "Phase 1: Validation & Stakeholder Alignment",
    "Phase 2: Technical Pilot & Feedback Loop",
    "Phase 3: Scale & Full Implementation",
];

/// Section appended when input interpolation is enabled.
pub const CONTEXT_SECTION: &str = "Context";

const NO_ASSUMPTIONS: &str = "None provided";
const PROBLEM_PREVIEW_CHARS: usize = 20;
const ASSUMPTIONS_PREVIEW_CHARS: usize = 30;

/// Maps a validated problem to a framework analysis.
pub struct FrameworkDispatcher {
    selector: Box<dyn FrameworkSelector>,
    interpolate_input: bool,
}

impl FrameworkDispatcher {
    pub fn new(selector: Box<dyn FrameworkSelector>) -> Self {
        Self {
            selector,
            interpolate_input: false,
        }
    }

    /// Echo truncated input into a trailing `Context` section of the output.
    pub fn with_input_interpolation(mut self, enabled: bool) -> Self {
        self.interpolate_input = enabled;
        self
    }

    /// Resolves the framework for a request.
    ///
    /// Unknown explicit names fall back to [`FrameworkKey::DEFAULT`].
    pub fn resolve(&self, problem: &str, selection: &FrameworkSelection) -> FrameworkKey {
        match selection {
            FrameworkSelection::Auto => self.selector.select(problem),
            FrameworkSelection::Explicit(name) => match name.parse::<FrameworkKey>() {
                Ok(key) => key,
                Err(e) => {
                    tracing::warn!(
                        requested = %name,
                        fallback = %FrameworkKey::DEFAULT,
                        "{}, using default framework",
                        e
                    );
                    FrameworkKey::DEFAULT
                }
            },
        }
    }

    /// Builds the success response for an already validated problem.
    pub fn dispatch(
        &self,
        problem: &str,
        assumptions: &str,
        selection: &FrameworkSelection,
    ) -> AnalysisResponse {
        let problem = problem.trim();
        let assumptions = match assumptions.trim() {
            "" => NO_ASSUMPTIONS,
            trimmed => trimmed,
        };

        let key = self.resolve(problem, selection);
        let mut output = template_for(key).to_output();
        if self.interpolate_input {
            append_context(&mut output, key, problem, assumptions);
        }

        AnalysisResponse::success(
            key,
            format!("Challenge: {}\n\nAssumptions: {}", problem, assumptions),
            output,
            SOLUTION.to_string(),
            EXECUTION_PLAN.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl Default for FrameworkDispatcher {
    fn default() -> Self {
        Self::new(Box::new(KeywordFrameworkSelector))
    }
}

fn append_context(output: &mut FrameworkOutput, key: FrameworkKey, problem: &str, assumptions: &str) {
    output.push_section(
        CONTEXT_SECTION,
        vec![
            format!(
                "Evaluation of {}... based on {}.",
                preview(problem, PROBLEM_PREVIEW_CHARS),
                key.display_name()
            ),
            format!("Verified: {}...", preview(assumptions, ASSUMPTIONS_PREVIEW_CHARS)),
        ],
    );
}

fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
