//! Analysis request value types.

/// How the client asked for a framework.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FrameworkSelection {
    /// Infer the framework from the problem text.
    #[default]
    Auto,
    /// Use the named framework; unknown names fall back to the default.
    Explicit(String),
}

impl FrameworkSelection {
    /// Parses a raw selector. `"auto"` (any case) and blank input mean [`FrameworkSelection::Auto`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
            FrameworkSelection::Auto
        } else {
            FrameworkSelection::Explicit(trimmed.to_string())
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, FrameworkSelection::Auto)
    }
}

/// A single decision problem submitted for analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub problem: String,
    pub assumptions: String,
    pub selection: FrameworkSelection,
}

impl AnalysisRequest {
    pub fn new(
        problem: impl Into<String>,
        assumptions: impl Into<String>,
        framework: &str,
    ) -> Self {
        Self {
            problem: problem.into(),
            assumptions: assumptions.into(),
            selection: FrameworkSelection::parse(framework),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_is_case_insensitive() {
        assert_eq!(FrameworkSelection::parse("auto"), FrameworkSelection::Auto);
        assert_eq!(FrameworkSelection::parse("AUTO"), FrameworkSelection::Auto);
        assert_eq!(FrameworkSelection::parse(" Auto "), FrameworkSelection::Auto);
    }

    #[test]
    fn blank_selector_means_auto() {
        assert!(FrameworkSelection::parse("").is_auto());
        assert!(FrameworkSelection::parse("   ").is_auto());
    }

    #[test]
    fn explicit_selector_is_trimmed() {
        assert_eq!(
            FrameworkSelection::parse("  rice "),
            FrameworkSelection::Explicit("rice".to_string())
        );
    }

    #[test]
    fn request_new_parses_selector() {
        let request = AnalysisRequest::new("problem", "", "SWOT");
        assert_eq!(request.selection, FrameworkSelection::Explicit("SWOT".to_string()));
        assert!(request.assumptions.is_empty());
    }
}
