//! Skill tags
//!
//! Provides [`Skill`], the capability vocabulary shared by the classifier
//! (which derives required skills from a query) and the catalog (which lists
//! the skills each role satisfies).

use crate::error::ParseLabelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A capability tag
///
/// The first five variants are the categories a query can require. The rest
/// only appear in catalog entries and describe what a role brings beyond
/// those categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Skill {
    /// Finding and collecting source material
    Research,
    /// Breaking a problem down and comparing alternatives
    Analysis,
    /// Writing programs and algorithms
    Coding,
    /// Combining partial results into a whole
    Synthesis,
    /// Producing novel ideas and designs
    Creativity,

    /// Broad, shallow reasoning
    GeneralReasoning,
    /// Multi-step deliberate reasoning
    DeepReasoning,
    /// Ordering work into steps
    Planning,
    /// Querying the web
    WebSearch,
    /// Gathering facts from many sources
    InformationGathering,
    /// Cross-checking claims
    FactChecking,
    /// Reviewing technical artefacts
    TechnicalAnalysis,
    /// Designing algorithms
    AlgorithmDesign,
    /// Generating many options quickly
    Brainstorming,
    /// Shaping form and structure
    Design,
    /// Judging quality of results
    Evaluation,
    /// Enforcing quality standards
    QualityCheck,
    /// Confirming correctness
    Verification,
}

impl Skill {
    /// Skills a query can require, in keyword-pass order
    pub const REQUIRABLE: [Skill; 5] = [
        Skill::Research,
        Skill::Analysis,
        Skill::Coding,
        Skill::Synthesis,
        Skill::Creativity,
    ];

    /// Every skill tag
    pub const ALL: [Skill; 18] = [
        Skill::Research,
        Skill::Analysis,
        Skill::Coding,
        Skill::Synthesis,
        Skill::Creativity,
        Skill::GeneralReasoning,
        Skill::DeepReasoning,
        Skill::Planning,
        Skill::WebSearch,
        Skill::InformationGathering,
        Skill::FactChecking,
        Skill::TechnicalAnalysis,
        Skill::AlgorithmDesign,
        Skill::Brainstorming,
        Skill::Design,
        Skill::Evaluation,
        Skill::QualityCheck,
        Skill::Verification,
    ];

    /// Stable snake_case label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Skill::Research => "research",
            Skill::Analysis => "analysis",
            Skill::Coding => "coding",
            Skill::Synthesis => "synthesis",
            Skill::Creativity => "creativity",
            Skill::GeneralReasoning => "general_reasoning",
            Skill::DeepReasoning => "deep_reasoning",
            Skill::Planning => "planning",
            Skill::WebSearch => "web_search",
            Skill::InformationGathering => "information_gathering",
            Skill::FactChecking => "fact_checking",
            Skill::TechnicalAnalysis => "technical_analysis",
            Skill::AlgorithmDesign => "algorithm_design",
            Skill::Brainstorming => "brainstorming",
            Skill::Design => "design",
            Skill::Evaluation => "evaluation",
            Skill::QualityCheck => "quality_check",
            Skill::Verification => "verification",
        }
    }

    /// Whether a query can require this skill
    #[inline]
    #[must_use]
    pub fn is_requirable(&self) -> bool {
        Self::REQUIRABLE.contains(self)
    }
}

impl Display for Skill {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Skill {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|skill| skill.as_str() == needle)
            .ok_or_else(|| ParseLabelError::new("skill", s))
    }
}
