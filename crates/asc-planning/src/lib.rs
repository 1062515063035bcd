//! ASC Planning
//!
//! The first two pipeline stages:
//!
//! - [`ComplexityClassifier`]: query text → ([`ComplexityTier`], required [`Skill`]s)
//! - [`TeamPlanner`]: (tier, skills) → [`TeamPlan`] (roles, strategy, pattern,
//!   predicted performance)
//!
//! Both are total: every input, including the empty string and the empty
//! skill set, has a defined output.
//!
//! # Example
//!
//! ```rust
//! use asc_planning::{ComplexityClassifier, ComplexityTier, TeamPlanner};
//!
//! let classification = ComplexityClassifier::new().classify("Compare two sorting algorithms");
//! assert_eq!(classification.tier, ComplexityTier::High);
//!
//! let plan = TeamPlanner::default().form_team(classification.tier, &classification.skills);
//! assert!(plan.team_size() >= 4);
//! ```
//!
//! [`Skill`]: asc_catalog::Skill

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod classifier;
mod planner;
mod task;

pub use classifier::{
    classify, Classification, ComplexityClassifier, ComplexityTier, TierHits, SKILL_KEYWORDS,
    TIER_INDICATORS, TIER_PRIORITY,
};
pub use planner::{
    predicted_performance, recommended_team_size, CollaborationPattern, FormationStrategy,
    TeamPlan, TeamPlanner, MAX_TEAM_SIZE, MIN_TEAM_SIZE,
};
pub use task::{TaskDescriptor, TaskId, TimeLimits, DEFAULT_DOMAIN};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
