//! Analysis engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::engine::MIN_PROBLEM_LENGTH;

/// Analysis engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum trimmed problem length, in characters
    #[serde(default = "default_min_problem_length")]
    pub min_problem_length: usize,

    /// Echo truncated input into a `Context` section of the framework output
    #[serde(default)]
    pub interpolate_input: bool,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_problem_length == 0 {
            return Err(ValidationError::InvalidMinProblemLength);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            min_problem_length: default_min_problem_length(),
            interpolate_input: false,
        }
    }
}

fn default_min_problem_length() -> usize {
    MIN_PROBLEM_LENGTH
}
