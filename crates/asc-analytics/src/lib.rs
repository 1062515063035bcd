//! ASC Analytics
//!
//! Accumulates one [`AnalyticsRecord`] per completed task and reports
//! grouped statistics:
//!
//! - overall task count, success rate and average performance
//! - average performance per complexity tier (empty tiers report 0.0)
//! - average performance per collaboration pattern, in first-seen order
//! - the best pattern by average, ties going to the first seen
//!
//! [`PerformanceLedger`] is the plain append-only history. [`SharedLedger`]
//! wraps it in a mutex so parallel pipelines can record through a single
//! serialization point.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

mod ledger;
mod report;

pub use ledger::{AnalyticsRecord, PerformanceLedger, SharedLedger, DEFAULT_SUCCESS_THRESHOLD};
pub use report::{Analytics, AnalyticsSummary};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
