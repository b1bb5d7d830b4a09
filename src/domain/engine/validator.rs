//! Input validation gate.
//!
//! Length is the only check. Problems shorter than the minimum never reach
//! framework selection.

/// Default minimum problem length, in characters, after trimming.
pub const MIN_PROBLEM_LENGTH: usize = 25;

/// Questions returned when a problem is too short to analyze.
pub const CLARIFYING_QUESTIONS: &[&str] = &[
    "Could you provide more detail on the specific goal?",
    "Are there any timeline or budget constraints I should know about?",
    "Who are the primary stakeholders affected by this decision?",
];

/// Result of validating a problem statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<'a> {
    /// The trimmed problem text.
    Accepted(&'a str),
    /// Too short; carries the clarifying questions to return.
    NeedsInfo(Vec<String>),
}

#[derive(Debug, Clone, Copy)]
pub struct InputValidator {
    min_length: usize,
}

impl InputValidator {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Trims the problem and checks its length in characters.
    pub fn validate<'a>(&self, problem: &'a str) -> Validation<'a> {
        let trimmed = problem.trim();
        if trimmed.chars().count() < self.min_length {
            Validation::NeedsInfo(CLARIFYING_QUESTIONS.iter().map(|q| q.to_string()).collect())
        } else {
            Validation::Accepted(trimmed)
        }
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new(MIN_PROBLEM_LENGTH)
    }
}
