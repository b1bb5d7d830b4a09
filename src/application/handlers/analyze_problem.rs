//! AnalyzeProblemHandler - Validate a problem and apply a decision framework

use crate::config::AnalysisConfig;
use crate::domain::engine::{
    AnalysisRequest, AnalysisResponse, FrameworkDispatcher, InputValidator, Validation,
};

/// Handler for local framework analysis.
///
/// Runs the validation gate first; only accepted problems reach the
/// dispatcher.
#[derive(Default)]
pub struct AnalyzeProblemHandler {
    validator: InputValidator,
    dispatcher: FrameworkDispatcher,
}

impl AnalyzeProblemHandler {
    pub fn new(validator: InputValidator, dispatcher: FrameworkDispatcher) -> Self {
        Self {
            validator,
            dispatcher,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            InputValidator::new(config.min_problem_length),
            FrameworkDispatcher::default().with_input_interpolation(config.interpolate_input),
        )
    }

    pub fn handle(&self, request: &AnalysisRequest) -> AnalysisResponse {
        match self.validator.validate(&request.problem) {
            Validation::NeedsInfo(questions) => {
                tracing::info!(
                    min_length = self.validator.min_length(),
                    "Problem too short, asking for more information"
                );
                AnalysisResponse::needs_info(questions)
            }
            Validation::Accepted(problem) => {
                let response =
                    self.dispatcher
                        .dispatch(problem, &request.assumptions, &request.selection);
                tracing::info!(
                    framework = ?response.selected_framework,
                    auto = request.selection.is_auto(),
                    "Analysis generated"
                );
                response
            }
        }
    }
}
