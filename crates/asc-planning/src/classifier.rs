//! Complexity classification
//!
//! Maps free-text queries to a [`ComplexityTier`] and the required skills.
//!
//! Both passes are keyword tables over the lower-cased query using substring
//! matching. Indicators are checked independently, so one query may hit
//! indicators of several tiers. The tier is then resolved by
//! [`TIER_PRIORITY`], never by comparing hit counts.

use asc_catalog::{ParseLabelError, Skill};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Discrete task complexity
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityTier {
    /// Factual lookups and definitions
    #[default]
    Low,
    /// Explanations and summaries
    Medium,
    /// Comparison, evaluation and synthesis
    High,
}

impl ComplexityTier {
    /// All tiers, lowest first
    pub const ALL: [ComplexityTier; 3] =
        [ComplexityTier::Low, ComplexityTier::Medium, ComplexityTier::High];

    /// Lowercase label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Low => "low",
            ComplexityTier::Medium => "medium",
            ComplexityTier::High => "high",
        }
    }
}

impl Display for ComplexityTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComplexityTier {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(ComplexityTier::Low),
            "medium" => Ok(ComplexityTier::Medium),
            "high" => Ok(ComplexityTier::High),
            _ => Err(ParseLabelError::new("tier", s)),
        }
    }
}

/// Indicator words per tier. The three sets are disjoint.
pub const TIER_INDICATORS: [(ComplexityTier, &[&str]); 3] = [
    (
        ComplexityTier::High,
        &["compare", "analyze", "evaluate", "synthesize", "integrate", "comprehensive"],
    ),
    (
        ComplexityTier::Medium,
        &["explain", "describe", "summarize", "overview", "review"],
    ),
    (
        ComplexityTier::Low,
        &["what", "when", "where", "who", "define", "list"],
    ),
];

/// Resolution order: the first tier with at least one hit wins
pub const TIER_PRIORITY: [ComplexityTier; 3] =
    [ComplexityTier::High, ComplexityTier::Medium, ComplexityTier::Low];

/// Keywords per requirable skill, in discovery order
pub const SKILL_KEYWORDS: [(Skill, &[&str]); 5] = [
    (Skill::Research, &["search", "find", "research"]),
    (Skill::Analysis, &["analyze", "analysis", "compare"]),
    (Skill::Coding, &["code", "program", "algorithm"]),
    (Skill::Synthesis, &["synthesize", "combine", "integrate"]),
    (Skill::Creativity, &["creative", "design", "innovative"]),
];

/// Number of indicator words matched per tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierHits {
    /// High-tier indicators found
    pub high: usize,
    /// Medium-tier indicators found
    pub medium: usize,
    /// Low-tier indicators found
    pub low: usize,
}

impl TierHits {
    /// Hits recorded for `tier`
    #[inline]
    #[must_use]
    pub fn get(&self, tier: ComplexityTier) -> usize {
        match tier {
            ComplexityTier::High => self.high,
            ComplexityTier::Medium => self.medium,
            ComplexityTier::Low => self.low,
        }
    }

    fn set(&mut self, tier: ComplexityTier, hits: usize) {
        match tier {
            ComplexityTier::High => self.high = hits,
            ComplexityTier::Medium => self.medium = hits,
            ComplexityTier::Low => self.low = hits,
        }
    }
}

/// Classifier output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Resolved tier
    pub tier: ComplexityTier,
    /// Required skills in discovery order, without duplicates
    pub skills: Vec<Skill>,
    /// Raw indicator counts behind the tier decision
    pub hits: TierHits,
}

/// Keyword-table classifier
///
/// Holds no state besides references to the static tables; cheap to copy
/// and safe to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct ComplexityClassifier {
    tiers: &'static [(ComplexityTier, &'static [&'static str])],
    skills: &'static [(Skill, &'static [&'static str])],
}

impl ComplexityClassifier {
    /// Classifier over the built-in tables
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiers: &TIER_INDICATORS,
            skills: &SKILL_KEYWORDS,
        }
    }

    /// Classify a query
    ///
    /// Unmatched or empty input yields `(Low, [])`.
    #[must_use]
    pub fn classify(&self, query: &str) -> Classification {
        let lowered = query.to_lowercase();

        let hits = self.count_hits(&lowered);
        let tier = TIER_PRIORITY
            .into_iter()
            .find(|&tier| hits.get(tier) > 0)
            .unwrap_or(ComplexityTier::Low);

        let skills = self.required_skills(&lowered);

        tracing::debug!(
            %tier,
            high = hits.high,
            medium = hits.medium,
            low = hits.low,
            skills = skills.len(),
            "classified query"
        );

        Classification { tier, skills, hits }
    }

    fn count_hits(&self, lowered: &str) -> TierHits {
        let mut hits = TierHits::default();
        for (tier, indicators) in self.tiers {
            let count = indicators.iter().filter(|word| lowered.contains(**word)).count();
            hits.set(*tier, count);
        }
        hits
    }

    fn required_skills(&self, lowered: &str) -> Vec<Skill> {
        let mut skills = Vec::new();
        for (skill, keywords) in self.skills {
            if keywords.iter().any(|word| lowered.contains(*word)) && !skills.contains(skill) {
                skills.push(*skill);
            }
        }
        skills
    }
}

impl Default for ComplexityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify with the built-in tables
#[inline]
#[must_use]
pub fn classify(query: &str) -> Classification {
    ComplexityClassifier::new().classify(query)
}
