//! Append-only outcome history

use crate::report::Analytics;
use asc_planning::{CollaborationPattern, ComplexityTier};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Tasks finishing strictly above this performance count as successes
pub const DEFAULT_SUCCESS_THRESHOLD: f64 = 0.7;

/// Outcome of one completed task
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsRecord {
    /// Tier the task was classified as
    pub tier: ComplexityTier,
    /// Pattern the team collaborated with
    pub pattern: CollaborationPattern,
    /// Final simulated performance
    pub final_performance: f64,
    /// `final_performance > threshold`
    pub success: bool,
}

/// Append-only history of task outcomes
///
/// Lives for the duration of a run; nothing is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceLedger {
    records: Vec<AnalyticsRecord>,
    success_threshold: f64,
}

impl PerformanceLedger {
    /// Empty ledger with the default success threshold
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_success_threshold(DEFAULT_SUCCESS_THRESHOLD)
    }

    /// Empty ledger with a custom success threshold
    #[inline]
    #[must_use]
    pub fn with_success_threshold(threshold: f64) -> Self {
        Self {
            records: Vec::new(),
            success_threshold: threshold,
        }
    }

    /// Success threshold in use
    #[inline]
    #[must_use]
    pub fn success_threshold(&self) -> f64 {
        self.success_threshold
    }

    /// Append one outcome and return the stored record
    pub fn record(
        &mut self,
        tier: ComplexityTier,
        pattern: CollaborationPattern,
        final_performance: f64,
    ) -> AnalyticsRecord {
        let record = AnalyticsRecord {
            tier,
            pattern,
            final_performance,
            success: final_performance > self.success_threshold,
        };
        self.records.push(record);

        metrics::counter!("asc_tasks_recorded_total").increment(1);
        if record.success {
            metrics::counter!("asc_tasks_succeeded_total").increment(1);
        }
        tracing::debug!(
            %tier,
            %pattern,
            final_performance,
            success = record.success,
            total = self.records.len(),
            "recorded outcome"
        );

        record
    }

    /// Records in insertion order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[AnalyticsRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing has been recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Compute analytics over the current history
    #[must_use]
    pub fn report(&self) -> Analytics {
        Analytics::from_records(&self.records)
    }
}

impl Default for PerformanceLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Ledger shared between concurrent pipelines
///
/// `record` takes the lock for one append; it is the only serialization
/// point between pipelines.
#[derive(Debug, Clone, Default)]
pub struct SharedLedger {
    inner: Arc<Mutex<PerformanceLedger>>,
}

impl SharedLedger {
    /// Wrap a ledger
    #[inline]
    #[must_use]
    pub fn new(ledger: PerformanceLedger) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Append one outcome
    pub fn record(
        &self,
        tier: ComplexityTier,
        pattern: CollaborationPattern,
        final_performance: f64,
    ) -> AnalyticsRecord {
        self.inner.lock().record(tier, pattern, final_performance)
    }

    /// Compute analytics over a consistent view of the history
    #[must_use]
    pub fn report(&self) -> Analytics {
        self.inner.lock().report()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if nothing has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Copy of the current history
    #[must_use]
    pub fn snapshot(&self) -> PerformanceLedger {
        self.inner.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_strictly_above_threshold() {
        let mut ledger = PerformanceLedger::new();
        assert!(!ledger.record(ComplexityTier::Low, CollaborationPattern::Sequential, 0.7).success);
        assert!(ledger.record(ComplexityTier::Low, CollaborationPattern::Sequential, 0.71).success);
    }

    #[test]
    fn custom_threshold() {
        let mut ledger = PerformanceLedger::with_success_threshold(0.9);
        let rec = ledger.record(ComplexityTier::High, CollaborationPattern::HubAndSpoke, 0.85);
        assert!(!rec.success);
        assert_eq!(ledger.success_threshold(), 0.9);
    }

    #[test]
    fn records_keep_insertion_order() {
        let mut ledger = PerformanceLedger::new();
        ledger.record(ComplexityTier::High, CollaborationPattern::HubAndSpoke, 0.9);
        ledger.record(ComplexityTier::Low, CollaborationPattern::Sequential, 0.5);
        let tiers: Vec<_> = ledger.records().iter().map(|r| r.tier).collect();
        assert_eq!(tiers, vec![ComplexityTier::High, ComplexityTier::Low]);
    }

    #[test]
    fn shared_ledger_clones_share_history() {
        let shared = SharedLedger::default();
        let other = shared.clone();
        other.record(ComplexityTier::Medium, CollaborationPattern::Pipeline, 0.8);
        assert_eq!(shared.len(), 1);
        assert!(!shared.is_empty());
        assert_eq!(shared.snapshot().records()[0].pattern, CollaborationPattern::Pipeline);
    }
}
