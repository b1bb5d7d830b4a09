//! FrameworkKey enum identifying the supported decision frameworks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The six business-decision frameworks the engine can apply.
///
/// Parsing is case-insensitive; the canonical form is the uppercase wire
/// name returned by [`FrameworkKey::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FrameworkKey {
    #[serde(rename = "SWOT")]
    Swot,
    #[serde(rename = "RICE")]
    Rice,
    #[serde(rename = "5WHYS")]
    FiveWhys,
    #[serde(rename = "COST_BENEFIT")]
    CostBenefit,
    #[serde(rename = "FIRST_PRINCIPLES")]
    FirstPrinciples,
    #[serde(rename = "PORTERS_FIVE")]
    PortersFive,
}

/// Returned when a framework name does not match any known key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown framework: {0}")]
pub struct UnknownFramework(pub String);

impl FrameworkKey {
    /// Framework used when nothing else applies.
    pub const DEFAULT: FrameworkKey = FrameworkKey::Swot;

    /// Returns all framework keys.
    pub fn all() -> &'static [FrameworkKey] {
        &[
            FrameworkKey::Swot,
            FrameworkKey::Rice,
            FrameworkKey::FiveWhys,
            FrameworkKey::CostBenefit,
            FrameworkKey::FirstPrinciples,
            FrameworkKey::PortersFive,
        ]
    }

    /// Returns the canonical uppercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            FrameworkKey::Swot => "SWOT",
            FrameworkKey::Rice => "RICE",
            FrameworkKey::FiveWhys => "5WHYS",
            FrameworkKey::CostBenefit => "COST_BENEFIT",
            FrameworkKey::FirstPrinciples => "FIRST_PRINCIPLES",
            FrameworkKey::PortersFive => "PORTERS_FIVE",
        }
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            FrameworkKey::Swot => "SWOT Analysis",
            FrameworkKey::Rice => "RICE Scoring",
            FrameworkKey::FiveWhys => "Five Whys",
            FrameworkKey::CostBenefit => "Cost-Benefit Analysis",
            FrameworkKey::FirstPrinciples => "First Principles",
            FrameworkKey::PortersFive => "Porter's Five Forces",
        }
    }

    /// Resolves a client-supplied name, falling back to [`FrameworkKey::DEFAULT`].
    pub fn resolve_or_default(name: &str) -> FrameworkKey {
        name.parse().unwrap_or(Self::DEFAULT)
    }
}

impl FromStr for FrameworkKey {
    type Err = UnknownFramework;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let canonical = s.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|key| key.as_str() == canonical)
            .ok_or_else(|| UnknownFramework(s.to_string()))
    }
}

impl fmt::Display for FrameworkKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
