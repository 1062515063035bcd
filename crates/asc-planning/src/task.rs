//! Task descriptors
//!
//! A [`TaskDescriptor`] is created once per incoming query and is immutable
//! after classification. Its `time_limit` is advisory metadata; nothing in
//! the pipeline enforces it.

use crate::classifier::{ComplexityClassifier, ComplexityTier};
use asc_catalog::Skill;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use ulid::Ulid;

/// Domain used when the caller does not name one
pub const DEFAULT_DOMAIN: &str = "general";

/// Unique task identifier (ULID for sortability)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TaskId(pub Ulid);

impl TaskId {
    /// Generate new task ID
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Estimated completion time per tier, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeLimits {
    /// Low tier estimate
    pub low_secs: u64,
    /// Medium tier estimate
    pub medium_secs: u64,
    /// High tier estimate
    pub high_secs: u64,
}

impl TimeLimits {
    /// Time limit for `tier`
    #[inline]
    #[must_use]
    pub fn for_tier(&self, tier: ComplexityTier) -> Duration {
        let secs = match tier {
            ComplexityTier::Low => self.low_secs,
            ComplexityTier::Medium => self.medium_secs,
            ComplexityTier::High => self.high_secs,
        };
        Duration::from_secs(secs)
    }
}

impl Default for TimeLimits {
    fn default() -> Self {
        Self {
            low_secs: 60,
            medium_secs: 180,
            high_secs: 600,
        }
    }
}

/// A classified incoming task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDescriptor {
    id: TaskId,
    query: String,
    domain: String,
    tier: ComplexityTier,
    required_skills: Vec<Skill>,
    time_limit: Duration,
    created_at: DateTime<Utc>,
}

impl TaskDescriptor {
    /// Classify `query` and freeze the result into a descriptor
    #[must_use]
    pub fn classify(
        classifier: &ComplexityClassifier,
        query: impl Into<String>,
        domain: impl Into<String>,
        limits: &TimeLimits,
    ) -> Self {
        let query = query.into();
        let mut domain = domain.into();
        if domain.trim().is_empty() {
            domain = DEFAULT_DOMAIN.to_string();
        }

        let classification = classifier.classify(&query);

        Self {
            id: TaskId::new(),
            query,
            domain,
            tier: classification.tier,
            required_skills: classification.skills,
            time_limit: limits.for_tier(classification.tier),
            created_at: Utc::now(),
        }
    }

    /// Task ID
    #[inline]
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Original query text
    #[inline]
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Problem domain
    #[inline]
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Complexity tier
    #[inline]
    #[must_use]
    pub fn tier(&self) -> ComplexityTier {
        self.tier
    }

    /// Required skills in discovery order
    #[inline]
    #[must_use]
    pub fn required_skills(&self) -> &[Skill] {
        &self.required_skills
    }

    /// Advisory time budget
    #[inline]
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        self.time_limit
    }

    /// Creation timestamp
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
