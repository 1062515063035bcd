//! Agent roles
//!
//! Provides [`AgentRole`], the closed set of agent types a team can be built
//! from. Every per-role lookup in the workspace matches on this enum
//! exhaustively, so a new role cannot be added without deciding its skills,
//! display attributes and planner behaviour.

use crate::error::ParseLabelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Typed agent role
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AgentRole {
    /// Input/output generalist, also the team coordinator
    Io,
    /// Tree-of-thought deep reasoner
    Tot,
    /// Web researcher
    Web,
    /// Programmer
    Code,
    /// Ideation and design
    Creative,
    /// Reviewer and verifier
    Critic,
}

impl AgentRole {
    /// Every role, in catalog order
    pub const ALL: [AgentRole; 6] = [
        AgentRole::Io,
        AgentRole::Tot,
        AgentRole::Web,
        AgentRole::Code,
        AgentRole::Creative,
        AgentRole::Critic,
    ];

    /// The role used to lead and pad teams
    pub const COORDINATOR: AgentRole = AgentRole::Io;

    /// The deep reasoner of the standard catalog
    pub const DEEP_REASONER: AgentRole = AgentRole::Tot;

    /// Short uppercase identifier (`IO`, `TOT`, ...)
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Io => "IO",
            AgentRole::Tot => "TOT",
            AgentRole::Web => "WEB",
            AgentRole::Code => "CODE",
            AgentRole::Creative => "CREATIVE",
            AgentRole::Critic => "CRITIC",
        }
    }

    /// Human readable description
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            AgentRole::Io => "generalist coordinator",
            AgentRole::Tot => "deep reasoner",
            AgentRole::Web => "web researcher",
            AgentRole::Code => "programmer",
            AgentRole::Creative => "creative designer",
            AgentRole::Critic => "critic and verifier",
        }
    }

    /// Whether this role coordinates the team
    #[inline]
    #[must_use]
    pub fn is_coordinator(&self) -> bool {
        *self == Self::COORDINATOR
    }

    /// Whether this role performs deep reasoning
    #[inline]
    #[must_use]
    pub fn is_deep_reasoner(&self) -> bool {
        *self == Self::DEEP_REASONER
    }
}

impl Display for AgentRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgentRole {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.as_str() == needle)
            .ok_or_else(|| ParseLabelError::new("role", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("tot".parse::<AgentRole>().unwrap(), AgentRole::Tot);
        assert_eq!("Creative".parse::<AgentRole>().unwrap(), AgentRole::Creative);
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("COT".parse::<AgentRole>().is_err());
    }

    #[test]
    fn coordinator_and_reasoner_flags() {
        assert!(AgentRole::Io.is_coordinator());
        assert!(!AgentRole::Io.is_deep_reasoner());
        assert!(AgentRole::Tot.is_deep_reasoner());
        assert!(!AgentRole::Critic.is_coordinator());
    }

    #[test]
    fn serde_uses_short_identifiers() {
        let json = serde_json::to_string(&vec![AgentRole::Io, AgentRole::Critic]).unwrap();
        assert_eq!(json, r#"["IO","CRITIC"]"#);
    }
}
