//! ASC Optimize
//!
//! Simulates iterative improvement of a team toward a target quality level.
//!
//! Each step closes 15% of the remaining gap plus a constant nudge of 0.01,
//! never overshooting the target. Simulation stops once the value reaches
//! 95% of the target or after the iteration cap. The rule is deterministic:
//! no randomness, no I/O, no suspension except in
//! [`ConvergenceSimulator::simulate_cooperative`].
//!
//! # Example
//!
//! ```rust
//! use asc_optimize::simulate;
//!
//! let trace = simulate(0.65, 0.85);
//! assert_eq!(trace.initial(), 0.65);
//! assert!(trace.final_value() >= 0.85 * 0.95);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod convergence;
mod error;
mod scenario;

pub use convergence::{simulate, ConvergenceSimulator, ConvergenceSteps, PerformanceTrace, StepPolicy};
pub use error::TraceError;
pub use scenario::{OptimizationKind, OptimizationScenario, ScenarioResult};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
