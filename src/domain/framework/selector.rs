//! Framework auto-selection.
//!
//! The keyword table below is the single selection policy. Candidates are
//! tested in order and the first one with any keyword contained in the
//! lower-cased problem text wins; SWOT is used when nothing matches.

use super::key::FrameworkKey;

/// Chooses a framework for a problem statement.
pub trait FrameworkSelector: Send + Sync {
    /// Select a framework for the given problem text.
    fn select(&self, problem: &str) -> FrameworkKey;
}

/// Keyword candidates in priority order.
///
/// Keywords match as plain substrings with no word boundaries, so short
/// stems also fire inside longer words ("rival" in "arrival", "roi" in
/// "android"). Stems such as "priorit" and "invest" rely on this.
pub const KEYWORD_TABLE: &[(FrameworkKey, &[&str])] = &[
    (
        FrameworkKey::PortersFive,
        &[
            "competitor",
            "competition",
            "rival",
            "market share",
            "industry",
            "supplier",
            "new entrant",
            "substitute",
            "threat",
        ],
    ),
    (
        FrameworkKey::CostBenefit,
        &[
            "cost", "budget", "roi", "price", "pricing", "invest", "expense", "spend", "afford",
        ],
    ),
    (
        FrameworkKey::FiveWhys,
        &[
            "root cause",
            "why",
            "keeps failing",
            "recurring",
            "declining",
            "dropped",
            "churn",
        ],
    ),
    (
        FrameworkKey::Rice,
        &["feature", "roadmap", "backlog", "priorit", "user request", "sprint"],
    ),
    (
        FrameworkKey::FirstPrinciples,
        &[
            "from scratch",
            "fundamental",
            "rethink",
            "reinvent",
            "assumption",
            "first principles",
        ],
    ),
];

/// Substring-matching selector backed by [`KEYWORD_TABLE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordFrameworkSelector;

impl KeywordFrameworkSelector {
    /// Returns the matching framework and the keyword that triggered it.
    pub fn matched(&self, problem: &str) -> Option<(FrameworkKey, &'static str)> {
        let lowercase = problem.to_lowercase();

        KEYWORD_TABLE.iter().find_map(|(key, keywords)| {
            keywords
                .iter()
                .find(|keyword| lowercase.contains(*keyword))
                .map(|keyword| (*key, *keyword))
        })
    }
}

impl FrameworkSelector for KeywordFrameworkSelector {
    fn select(&self, problem: &str) -> FrameworkKey {
        match self.matched(problem) {
            Some((key, keyword)) => {
                tracing::debug!(framework = %key, keyword, "Auto-selected framework");
                key
            }
            None => {
                tracing::debug!(framework = %FrameworkKey::DEFAULT, "No keyword matched, using default");
                FrameworkKey::DEFAULT
            }
        }
    }
}
