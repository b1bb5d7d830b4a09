//! Static analysis templates for every supported framework.
//!
//! Each framework maps to a fixed, ordered list of sections. The content is
//! hand-authored and never depends on the problem being analyzed.

use super::key::FrameworkKey;
use super::output::FrameworkOutput;

/// A named section of a framework template.
#[derive(Debug, PartialEq, Eq)]
pub struct TemplateSection {
    pub name: &'static str,
    pub insights: &'static [&'static str],
}

/// The static template for one framework.
#[derive(Debug, PartialEq, Eq)]
pub struct FrameworkTemplate {
    pub key: FrameworkKey,
    pub sections: &'static [TemplateSection],
}

impl FrameworkTemplate {
    /// Returns the section names in template order.
    pub fn section_names(&self) -> Vec<&'static str> {
        self.sections.iter().map(|s| s.name).collect()
    }

    /// Builds the client-facing output for this template.
    pub fn to_output(&self) -> FrameworkOutput {
        let mut output = FrameworkOutput::new();
        for section in self.sections {
            output.push_section(
                section.name,
                section.insights.iter().map(|i| i.to_string()).collect(),
            );
        }
        output
    }
}

/// Returns the static template for a framework.
pub fn template_for(key: FrameworkKey) -> &'static FrameworkTemplate {
    match key {
        FrameworkKey::Swot => &SWOT,
        FrameworkKey::Rice => &RICE,
        FrameworkKey::FiveWhys => &FIVE_WHYS,
        FrameworkKey::CostBenefit => &COST_BENEFIT,
        FrameworkKey::FirstPrinciples => &FIRST_PRINCIPLES,
        FrameworkKey::PortersFive => &PORTERS_FIVE,
    }
}

// ============================================================================
// SWOT
// ============================================================================

static SWOT: FrameworkTemplate = FrameworkTemplate {
    key: FrameworkKey::Swot,
    sections: &[
        TemplateSection {
            name: "Strengths",
            insights: &["Internal expertise", "Existing infrastructure"],
        },
        TemplateSection {
            name: "Weaknesses",
            insights: &["Limited documentation", "Tight deadline"],
        },
        TemplateSection {
            name: "Opportunities",
            insights: &["Market expansion", "Automation potential"],
        },
        TemplateSection {
            name: "Threats",
            insights: &["Changing regulations", "High competition"],
        },
    ],
};

// ============================================================================
// RICE
// ============================================================================

static RICE: FrameworkTemplate = FrameworkTemplate {
    key: FrameworkKey::Rice,
    sections: &[
        TemplateSection {
            name: "Reach",
            insights: &[
                "Estimate how many users the initiative touches per quarter",
                "Segment reach by primary and secondary audiences",
            ],
        },
        TemplateSection {
            name: "Impact",
            insights: &[
                "Score impact per user on a 0.25 to 3 scale",
                "Tie impact to the metric the team is accountable for",
            ],
        },
        TemplateSection {
            name: "Confidence",
            insights: &[
                "Discount estimates that lack supporting data",
                "Record which assumptions drive the confidence level",
            ],
        },
        TemplateSection {
            name: "Effort",
            insights: &[
                "Size the work in person-months across all functions",
                "Include validation and rollout effort, not only build time",
            ],
        },
        TemplateSection {
            name: "Priority Score",
            insights: &[
                "Compute (Reach x Impact x Confidence) / Effort for each candidate",
                "Rank candidates and revisit scores after each release",
            ],
        },
    ],
};

// ============================================================================
// Five Whys
// ============================================================================

static FIVE_WHYS: FrameworkTemplate = FrameworkTemplate {
    key: FrameworkKey::FiveWhys,
    sections: &[
        TemplateSection {
            name: "Problem Statement",
            insights: &["State the observable symptom without assigning blame"],
        },
        TemplateSection {
            name: "Why 1",
            insights: &["The immediate trigger that produced the symptom"],
        },
        TemplateSection {
            name: "Why 2",
            insights: &["The process gap that allowed the trigger"],
        },
        TemplateSection {
            name: "Why 3",
            insights: &["The missing control or check behind that gap"],
        },
        TemplateSection {
            name: "Why 4",
            insights: &["The organizational habit that left the control out"],
        },
        TemplateSection {
            name: "Why 5",
            insights: &["The underlying incentive or constraint sustaining the habit"],
        },
        TemplateSection {
            name: "Root Cause",
            insights: &[
                "Address the deepest cause rather than the symptom",
                "Define a countermeasure and an owner for follow-up",
            ],
        },
    ],
};

// ============================================================================
// Cost-Benefit
// ============================================================================

static COST_BENEFIT: FrameworkTemplate = FrameworkTemplate {
    key: FrameworkKey::CostBenefit,
    sections: &[
        TemplateSection {
            name: "Costs",
            insights: &[
                "Upfront investment in tooling and people",
                "Ongoing operational and maintenance spend",
                "Opportunity cost of delayed alternatives",
            ],
        },
        TemplateSection {
            name: "Benefits",
            insights: &[
                "Direct revenue or savings once adopted",
                "Reduced manual effort and error rates",
                "Strategic positioning for future initiatives",
            ],
        },
        TemplateSection {
            name: "Risks",
            insights: &[
                "Benefits may arrive later than projected",
                "Hidden integration costs",
            ],
        },
        TemplateSection {
            name: "Net Assessment",
            insights: &[
                "Proceed if benefits exceed costs within the planning horizon",
                "Stage spending so the decision can be reversed cheaply",
            ],
        },
    ],
};

// ============================================================================
// First Principles
// ============================================================================

static FIRST_PRINCIPLES: FrameworkTemplate = FrameworkTemplate {
    key: FrameworkKey::FirstPrinciples,
    sections: &[
        TemplateSection {
            name: "Core Assumptions",
            insights: &[
                "List the beliefs the current approach takes for granted",
                "Flag assumptions inherited from convention rather than evidence",
            ],
        },
        TemplateSection {
            name: "Fundamental Truths",
            insights: &[
                "Physical, economic, or legal constraints that cannot be negotiated",
                "Customer needs that persist regardless of solution",
            ],
        },
        TemplateSection {
            name: "Rebuilt Approach",
            insights: &[
                "Design a solution from the fundamental truths upward",
                "Compare the rebuilt approach against the status quo",
            ],
        },
    ],
};

// ============================================================================
// Porter's Five Forces
// ============================================================================

static PORTERS_FIVE: FrameworkTemplate = FrameworkTemplate {
    key: FrameworkKey::PortersFive,
    sections: &[
        TemplateSection {
            name: "Competitive Rivalry",
            insights: &[
                "Number and strength of direct competitors",
                "Price pressure from comparable offerings",
            ],
        },
        TemplateSection {
            name: "Threat of New Entrants",
            insights: &[
                "Barriers to entry such as capital and regulation",
                "Brand loyalty protecting incumbents",
            ],
        },
        TemplateSection {
            name: "Supplier Power",
            insights: &[
                "Concentration of key suppliers",
                "Switching costs for critical inputs",
            ],
        },
        TemplateSection {
            name: "Buyer Power",
            insights: &[
                "Price sensitivity of the customer base",
                "Availability of alternatives to buyers",
            ],
        },
        TemplateSection {
            name: "Threat of Substitutes",
            insights: &[
                "Adjacent products that solve the same need",
                "Relative price-performance of substitutes",
            ],
        },
    ],
};
