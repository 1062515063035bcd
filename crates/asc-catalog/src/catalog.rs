//! Capability catalog
//!
//! Provides [`CapabilityCatalog`], the ordered role → skills table the team
//! planner scans. Iteration order is part of the contract: the planner picks
//! the *first* role in catalog order that satisfies a skill.

use crate::role::AgentRole;
use crate::skill::Skill;
use indexmap::IndexSet;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

static STANDARD: Lazy<Arc<CapabilityCatalog>> = Lazy::new(|| Arc::new(CapabilityCatalog::standard()));

/// One catalog row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Role this row describes
    pub role: AgentRole,
    /// Skills the role satisfies, in declaration order
    pub skills: IndexSet<Skill>,
}

impl CatalogEntry {
    /// Create a new entry
    #[must_use]
    pub fn new(role: AgentRole, skills: impl IntoIterator<Item = Skill>) -> Self {
        Self {
            role,
            skills: skills.into_iter().collect(),
        }
    }

    /// Whether this role satisfies `skill`
    #[inline]
    #[must_use]
    pub fn satisfies(&self, skill: Skill) -> bool {
        self.skills.contains(&skill)
    }
}

/// Read-only role → skills mapping
///
/// Construct once at startup (usually via [`CapabilityCatalog::shared`]) and
/// pass by reference. Roles appear at most once; a later entry for a role
/// already present is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityCatalog {
    entries: Vec<CatalogEntry>,
}

impl CapabilityCatalog {
    /// Build a catalog from entries, keeping the first entry per role
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut kept: Vec<CatalogEntry> = Vec::new();
        for entry in entries {
            if !kept.iter().any(|e| e.role == entry.role) {
                kept.push(entry);
            }
        }
        Self { entries: kept }
    }

    /// The built-in six-role catalog
    #[must_use]
    pub fn standard() -> Self {
        Self::from_entries(AgentRole::ALL.into_iter().map(|role| {
            let skills: &[Skill] = match role {
                AgentRole::Io => &[Skill::Research, Skill::GeneralReasoning, Skill::Synthesis],
                AgentRole::Tot => &[Skill::Analysis, Skill::DeepReasoning, Skill::Planning],
                AgentRole::Web => &[
                    Skill::WebSearch,
                    Skill::InformationGathering,
                    Skill::FactChecking,
                ],
                AgentRole::Code => &[
                    Skill::Coding,
                    Skill::TechnicalAnalysis,
                    Skill::AlgorithmDesign,
                ],
                AgentRole::Creative => &[Skill::Creativity, Skill::Brainstorming, Skill::Design],
                AgentRole::Critic => &[
                    Skill::Evaluation,
                    Skill::QualityCheck,
                    Skill::Verification,
                ],
            };
            CatalogEntry::new(role, skills.iter().copied())
        }))
    }

    /// Process-wide shared instance of [`CapabilityCatalog::standard`]
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&STANDARD)
    }

    /// Entries in catalog order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Roles in catalog order
    pub fn roles(&self) -> impl Iterator<Item = AgentRole> + '_ {
        self.entries.iter().map(|e| e.role)
    }

    /// Number of roles
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog has no roles
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Skills of `role`, if the role is catalogued
    #[must_use]
    pub fn skills_of(&self, role: AgentRole) -> Option<&IndexSet<Skill>> {
        self.entries
            .iter()
            .find(|e| e.role == role)
            .map(|e| &e.skills)
    }

    /// Whether `role` is catalogued with `skill`
    #[must_use]
    pub fn role_satisfies(&self, role: AgentRole, skill: Skill) -> bool {
        self.skills_of(role).is_some_and(|skills| skills.contains(&skill))
    }

    /// First role in catalog order that satisfies `skill` and is not in `exclude`
    #[must_use]
    pub fn first_role_with(&self, skill: Skill, exclude: &[AgentRole]) -> Option<AgentRole> {
        self.entries
            .iter()
            .find(|e| e.satisfies(skill) && !exclude.contains(&e.role))
            .map(|e| e.role)
    }

    /// Whether any of `roles` satisfies `skill`
    #[must_use]
    pub fn covers(&self, roles: &[AgentRole], skill: Skill) -> bool {
        roles.iter().any(|&role| self.role_satisfies(role, skill))
    }
}

impl Default for CapabilityCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
