//! Grouped analytics over a ledger

use crate::ledger::AnalyticsRecord;
use asc_planning::{CollaborationPattern, ComplexityTier};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Result of [`PerformanceLedger::report`](crate::PerformanceLedger::report)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Analytics {
    /// No task has been recorded yet
    NoData,
    /// Statistics over at least one record
    Summary(AnalyticsSummary),
}

impl Analytics {
    /// Compute analytics over `records`
    #[must_use]
    pub fn from_records(records: &[AnalyticsRecord]) -> Self {
        match AnalyticsSummary::from_records(records) {
            Some(summary) => Self::Summary(summary),
            None => Self::NoData,
        }
    }

    /// The summary, if any record exists
    #[inline]
    #[must_use]
    pub fn summary(&self) -> Option<&AnalyticsSummary> {
        match self {
            Self::NoData => None,
            Self::Summary(summary) => Some(summary),
        }
    }
}

/// Aggregate statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Records aggregated
    pub total_tasks: usize,
    /// Records flagged successful
    pub successful_tasks: usize,
    /// `successful_tasks / total_tasks`
    pub success_rate: f64,
    /// Mean final performance
    pub average_performance: f64,
    /// Mean per tier; every tier present, 0.0 when it has no records
    pub tier_performance: IndexMap<ComplexityTier, f64>,
    /// Mean per pattern, in first-seen order
    pub pattern_performance: IndexMap<CollaborationPattern, f64>,
    /// Pattern with the highest mean; ties go to the first seen
    pub best_pattern: CollaborationPattern,
}

impl AnalyticsSummary {
    /// Aggregate `records`; `None` when empty
    #[must_use]
    pub fn from_records(records: &[AnalyticsRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let total_tasks = records.len();
        let successful_tasks = records.iter().filter(|r| r.success).count();
        let average_performance = mean(records.iter().map(|r| r.final_performance));

        let mut tier_performance = IndexMap::new();
        for tier in ComplexityTier::ALL {
            let avg = mean(
                records
                    .iter()
                    .filter(|r| r.tier == tier)
                    .map(|r| r.final_performance),
            );
            tier_performance.insert(tier, avg);
        }

        let mut grouped: IndexMap<CollaborationPattern, Vec<f64>> = IndexMap::new();
        for r in records {
            grouped.entry(r.pattern).or_default().push(r.final_performance);
        }
        let pattern_performance: IndexMap<CollaborationPattern, f64> = grouped
            .into_iter()
            .map(|(pattern, values)| (pattern, mean(values.into_iter())))
            .collect();

        // Non-empty records guarantee at least one group.
        let mut best = pattern_performance.first().map(|(p, v)| (*p, *v))?;
        for (&pattern, &avg) in pattern_performance.iter().skip(1) {
            if avg > best.1 {
                best = (pattern, avg);
            }
        }

        Some(Self {
            total_tasks,
            successful_tasks,
            success_rate: successful_tasks as f64 / total_tasks as f64,
            average_performance,
            tier_performance,
            pattern_performance,
            best_pattern: best.0,
        })
    }

    /// Mean performance of `tier` (0.0 when it has no records)
    #[must_use]
    pub fn tier_average(&self, tier: ComplexityTier) -> f64 {
        self.tier_performance.get(&tier).copied().unwrap_or(0.0)
    }

    /// Mean performance of `pattern`, if it has records
    #[must_use]
    pub fn pattern_average(&self, pattern: CollaborationPattern) -> Option<f64> {
        self.pattern_performance.get(&pattern).copied()
    }

    /// Short textual observations about the run
    #[must_use]
    pub fn insights(&self) -> Vec<&'static str> {
        let mut insights = Vec::new();

        if self.tier_average(ComplexityTier::High) > self.tier_average(ComplexityTier::Low) {
            insights.push("Complex tasks benefit from specialized agent teams");
        }

        insights.push(if self.average_performance > 0.8 {
            "Dynamic team formation is highly effective"
        } else if self.average_performance > 0.6 {
            "Good performance with room for optimization"
        } else {
            "Team formation strategy needs refinement"
        });

        match self.best_pattern {
            CollaborationPattern::FullyConnected => {
                insights.push("Full connectivity enhances collaboration");
            }
            CollaborationPattern::HubAndSpoke => {
                insights.push("Centralized coordination works well");
            }
            CollaborationPattern::Sequential | CollaborationPattern::Pipeline => {}
        }

        insights
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PerformanceLedger;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_history_is_no_data() {
        assert_eq!(PerformanceLedger::new().report(), Analytics::NoData);
        assert!(Analytics::NoData.summary().is_none());
    }

    #[test]
    fn two_record_example() {
        let mut ledger = PerformanceLedger::new();
        ledger.record(ComplexityTier::High, CollaborationPattern::HubAndSpoke, 0.9);
        ledger.record(ComplexityTier::Low, CollaborationPattern::Sequential, 0.5);

        let report = ledger.report();
        let summary = report.summary().unwrap();
        assert_eq!(summary.total_tasks, 2);
        assert_eq!(summary.success_rate, 0.5);
        assert!((summary.average_performance - 0.7).abs() < 1e-12);
        assert_eq!(summary.tier_average(ComplexityTier::Medium), 0.0);
        assert_eq!(summary.tier_average(ComplexityTier::High), 0.9);
        assert_eq!(summary.best_pattern, CollaborationPattern::HubAndSpoke);
    }

    #[test]
    fn tie_goes_to_first_seen_pattern() {
        let mut ledger = PerformanceLedger::new();
        ledger.record(ComplexityTier::Low, CollaborationPattern::Pipeline, 0.8);
        ledger.record(ComplexityTier::Low, CollaborationPattern::FullyConnected, 0.8);
        let report = ledger.report();
        assert_eq!(report.summary().unwrap().best_pattern, CollaborationPattern::Pipeline);
    }

    #[test]
    fn pattern_order_is_first_seen() {
        let mut ledger = PerformanceLedger::new();
        ledger.record(ComplexityTier::Low, CollaborationPattern::Sequential, 0.6);
        ledger.record(ComplexityTier::High, CollaborationPattern::HubAndSpoke, 0.9);
        ledger.record(ComplexityTier::Low, CollaborationPattern::Sequential, 0.8);
        let report = ledger.report();
        let summary = report.summary().unwrap();
        let order: Vec<_> = summary.pattern_performance.keys().copied().collect();
        assert_eq!(
            order,
            vec![CollaborationPattern::Sequential, CollaborationPattern::HubAndSpoke]
        );
        assert!((summary.pattern_average(CollaborationPattern::Sequential).unwrap() - 0.7).abs() < 1e-12);
        assert_eq!(summary.pattern_average(CollaborationPattern::Pipeline), None);
    }

    #[test]
    fn tier_keys_always_present() {
        let mut ledger = PerformanceLedger::new();
        ledger.record(ComplexityTier::Medium, CollaborationPattern::Pipeline, 0.75);
        let report = ledger.report();
        let keys: Vec<_> = report.summary().unwrap().tier_performance.keys().copied().collect();
        assert_eq!(keys, ComplexityTier::ALL.to_vec());
    }

    #[test]
    fn insights_follow_averages() {
        let mut ledger = PerformanceLedger::new();
        ledger.record(ComplexityTier::High, CollaborationPattern::HubAndSpoke, 0.9);
        ledger.record(ComplexityTier::Low, CollaborationPattern::Sequential, 0.5);
        let report = ledger.report();
        assert_eq!(
            report.summary().unwrap().insights(),
            vec![
                "Complex tasks benefit from specialized agent teams",
                "Good performance with room for optimization",
                "Centralized coordination works well",
            ]
        );
    }

    #[test]
    fn serializes_with_status_tag() {
        let json = serde_json::to_value(Analytics::NoData).unwrap();
        assert_eq!(json["status"], "no_data");

        let mut ledger = PerformanceLedger::new();
        ledger.record(ComplexityTier::High, CollaborationPattern::FullyConnected, 0.95);
        let json = serde_json::to_value(ledger.report()).unwrap();
        assert_eq!(json["status"], "summary");
        assert_eq!(json["best_pattern"], "fully_connected");
        assert_eq!(json["tier_performance"]["medium"], 0.0);
    }
}
