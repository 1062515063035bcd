//! ASC Core - Adaptive Squad Coordinator
//!
//! Ties the pipeline stages together:
//! - Classifies queries and forms teams ([`asc_planning`])
//! - Wires teams into communication graphs ([`asc_topology`])
//! - Simulates performance convergence ([`asc_optimize`])
//! - Records outcomes and reports analytics ([`asc_analytics`])
//!
//! # Example
//!
//! ```rust
//! use asc_core::{AscConfig, Coordinator};
//!
//! let coordinator = Coordinator::new(AscConfig::default()).unwrap();
//! let outcome = coordinator.process("Compare two sorting algorithms", "cs");
//!
//! assert!(outcome.plan.has_deep_reasoner(coordinator.catalog()));
//! assert_eq!(outcome.graph.node_count(), outcome.plan.team_size());
//! assert_eq!(coordinator.ledger().len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod coordinator;
pub mod demo;
pub mod error;

pub use config::{AnalyticsConfig, AscConfig, SimulationConfig, TargetPolicy, TeamConfig};
pub use coordinator::{Coordinator, TaskOutcome, TaskRequest};
pub use demo::{demo_requests, run_demo, DemoReport, DEMO_QUERIES};
pub use error::{AscError, AscResult, ConfigError};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with ASC Core
    pub use crate::{AscConfig, Coordinator, TaskOutcome, TaskRequest};
    pub use asc_analytics::{Analytics, AnalyticsSummary};
    pub use asc_catalog::{AgentRole, Skill};
    pub use asc_planning::{CollaborationPattern, ComplexityTier, TeamPlan};
    pub use asc_topology::TopologyGraph;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
