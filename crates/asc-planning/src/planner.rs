//! Team formation
//!
//! Turns a classified task into a [`TeamPlan`]:
//!
//! 1. Target size from the tier, plus one per two required skills, capped
//! 2. Role selection: coordinator first, then the first not-yet-selected role
//!    per skill in discovery order, a forced deep reasoner for high tier,
//!    coordinator padding, and truncation from the tail
//!
//! "Deep reasoner" means any role the catalog lists with
//! [`Skill::DeepReasoning`], so custom catalogs may assign it elsewhere.
//! 3. Formation strategy label
//! 4. Collaboration pattern label
//! 5. Predicted performance from skill coverage and team size

use crate::classifier::ComplexityTier;
use asc_catalog::{AgentRole, CapabilityCatalog, ParseLabelError, Skill};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::Arc;

/// Smallest team the planner ever returns
pub const MIN_TEAM_SIZE: usize = 1;

/// Largest team the planner ever returns
pub const MAX_TEAM_SIZE: usize = 6;

/// How a team is organised around its skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormationStrategy {
    /// High tier with more than three skills
    HierarchicalSpecialization,
    /// More than two skills
    SkillBasedClustering,
    /// High tier with few skills
    DeepCollaboration,
    /// Everything else
    SimpleParallel,
}

impl FormationStrategy {
    /// Every strategy
    pub const ALL: [FormationStrategy; 4] = [
        FormationStrategy::HierarchicalSpecialization,
        FormationStrategy::SkillBasedClustering,
        FormationStrategy::DeepCollaboration,
        FormationStrategy::SimpleParallel,
    ];

    /// Select the strategy for a tier and skill count
    #[must_use]
    pub fn select(tier: ComplexityTier, skill_count: usize) -> Self {
        let high = tier == ComplexityTier::High;
        if high && skill_count > 3 {
            Self::HierarchicalSpecialization
        } else if skill_count > 2 {
            Self::SkillBasedClustering
        } else if high {
            Self::DeepCollaboration
        } else {
            Self::SimpleParallel
        }
    }

    /// snake_case label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HierarchicalSpecialization => "hierarchical_specialization",
            Self::SkillBasedClustering => "skill_based_clustering",
            Self::DeepCollaboration => "deep_collaboration",
            Self::SimpleParallel => "simple_parallel",
        }
    }
}

impl Display for FormationStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormationStrategy {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == needle)
            .ok_or_else(|| ParseLabelError::new("strategy", s))
    }
}

/// Communication topology assigned to a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaborationPattern {
    /// Chain of consecutive members
    Sequential,
    /// Member 0 talks to everyone else
    HubAndSpoke,
    /// Every pair of members is linked
    FullyConnected,
    /// Three-member hand-off without a deep reasoner
    Pipeline,
}

impl CollaborationPattern {
    /// Every pattern
    pub const ALL: [CollaborationPattern; 4] = [
        CollaborationPattern::Sequential,
        CollaborationPattern::HubAndSpoke,
        CollaborationPattern::FullyConnected,
        CollaborationPattern::Pipeline,
    ];

    /// Select the pattern for a finished role list
    #[must_use]
    pub fn select(roles: &[AgentRole], catalog: &CapabilityCatalog) -> Self {
        if roles.len() <= 2 {
            Self::Sequential
        } else if catalog.covers(roles, Skill::DeepReasoning) {
            Self::HubAndSpoke
        } else if roles.len() >= 4 {
            Self::FullyConnected
        } else {
            Self::Pipeline
        }
    }

    /// snake_case label
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::HubAndSpoke => "hub_and_spoke",
            Self::FullyConnected => "fully_connected",
            Self::Pipeline => "pipeline",
        }
    }
}

impl Display for CollaborationPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollaborationPattern {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == needle)
            .ok_or_else(|| ParseLabelError::new("pattern", s))
    }
}

/// Output of the team planner
///
/// Not mutated after creation; topology building and simulation only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamPlan {
    /// Roles in selection order (duplicates allowed)
    pub roles: Vec<AgentRole>,
    /// Formation strategy
    pub strategy: FormationStrategy,
    /// Collaboration pattern
    pub pattern: CollaborationPattern,
    /// Predicted performance in `[0, 1]`
    pub predicted_performance: f64,
    /// Required skills at least one selected role satisfies
    pub covered_skills: Vec<Skill>,
    /// Required skills no selected role satisfies
    pub uncovered_skills: Vec<Skill>,
}

impl TeamPlan {
    /// Number of team members
    #[inline]
    #[must_use]
    pub fn team_size(&self) -> usize {
        self.roles.len()
    }

    /// Whether any member is catalogued with deep reasoning
    #[inline]
    #[must_use]
    pub fn has_deep_reasoner(&self, catalog: &CapabilityCatalog) -> bool {
        catalog.covers(&self.roles, Skill::DeepReasoning)
    }

    /// Fraction of required skills covered; 1.0 when nothing is required
    #[must_use]
    pub fn coverage(&self) -> f64 {
        let required = self.covered_skills.len() + self.uncovered_skills.len();
        if required == 0 {
            1.0
        } else {
            self.covered_skills.len() as f64 / required as f64
        }
    }
}

/// Target team size: tier base plus one per two skills, capped at `cap`
///
/// `cap` itself is clamped to `MIN_TEAM_SIZE..=MAX_TEAM_SIZE`.
#[must_use]
pub fn recommended_team_size(tier: ComplexityTier, skill_count: usize, cap: usize) -> usize {
    let base = match tier {
        ComplexityTier::Low => 2,
        ComplexityTier::Medium => 3,
        ComplexityTier::High => 4,
    };
    let cap = cap.clamp(MIN_TEAM_SIZE, MAX_TEAM_SIZE);
    (base + skill_count / 2).min(cap)
}

/// `min(0.6 + 0.3 * covered/max(required,1) + 0.1 * min(size/4, 1), 1.0)`
#[must_use]
pub fn predicted_performance(covered: usize, required: usize, team_size: usize) -> f64 {
    let skill_bonus = 0.3 * (covered as f64 / required.max(1) as f64);
    let size_bonus = 0.1 * (team_size as f64 / 4.0).min(1.0);
    (0.6 + skill_bonus + size_bonus).min(1.0)
}

/// Team planner over a shared catalog
#[derive(Debug, Clone)]
pub struct TeamPlanner {
    catalog: Arc<CapabilityCatalog>,
    max_team_size: usize,
}

impl TeamPlanner {
    /// Create planner over `catalog`
    #[inline]
    #[must_use]
    pub fn new(catalog: Arc<CapabilityCatalog>) -> Self {
        Self {
            catalog,
            max_team_size: MAX_TEAM_SIZE,
        }
    }

    /// With a lower team size cap (clamped to `1..=6`)
    #[inline]
    #[must_use]
    pub fn with_max_team_size(mut self, max: usize) -> Self {
        self.max_team_size = max.clamp(MIN_TEAM_SIZE, MAX_TEAM_SIZE);
        self
    }

    /// Catalog used for role selection
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &CapabilityCatalog {
        &self.catalog
    }

    /// Form a team for a tier and required skills
    ///
    /// Duplicate skills are ignored after their first occurrence. Always
    /// returns between one and six roles.
    #[must_use]
    pub fn form_team(&self, tier: ComplexityTier, skills: &[Skill]) -> TeamPlan {
        let skills = dedup_preserving_order(skills);
        let target = recommended_team_size(tier, skills.len(), self.max_team_size);

        let mut roles = vec![AgentRole::COORDINATOR];
        for &skill in &skills {
            if let Some(role) = self.catalog.first_role_with(skill, &roles) {
                roles.push(role);
            }
        }

        if tier == ComplexityTier::High && !self.catalog.covers(&roles, Skill::DeepReasoning) {
            match self.catalog.first_role_with(Skill::DeepReasoning, &[]) {
                Some(reasoner) => roles.push(reasoner),
                None => tracing::warn!("catalog has no deep reasoner for a high tier task"),
            }
        }

        if roles.len() < target {
            roles.resize(target, AgentRole::COORDINATOR);
        }
        // Later additions go first: padding never displaces a matched role.
        roles.truncate(target);

        let (covered_skills, uncovered_skills): (Vec<Skill>, Vec<Skill>) = skills
            .iter()
            .copied()
            .partition(|&skill| self.catalog.covers(&roles, skill));

        let strategy = FormationStrategy::select(tier, skills.len());
        let pattern = CollaborationPattern::select(&roles, &self.catalog);
        let predicted = predicted_performance(covered_skills.len(), skills.len(), roles.len());

        tracing::debug!(
            %tier,
            target,
            team = ?roles,
            %strategy,
            %pattern,
            predicted,
            "formed team"
        );

        TeamPlan {
            roles,
            strategy,
            pattern,
            predicted_performance: predicted,
            covered_skills,
            uncovered_skills,
        }
    }
}

impl Default for TeamPlanner {
    fn default() -> Self {
        Self::new(CapabilityCatalog::shared())
    }
}

fn dedup_preserving_order(skills: &[Skill]) -> Vec<Skill> {
    let mut out = Vec::with_capacity(skills.len());
    for &skill in skills {
        if !out.contains(&skill) {
            out.push(skill);
        }
    }
    out
}
