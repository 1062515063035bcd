//! Testing utilities for the ASC workspace
//!
//! Shared fixtures, config files, and assertions.

#![allow(missing_docs)]

use asc_analytics::PerformanceLedger;
use asc_core::{AscConfig, Coordinator, TargetPolicy};
use asc_optimize::PerformanceTrace;
use asc_planning::{CollaborationPattern, ComplexityTier, TeamPlan};
use asc_topology::TopologyGraph;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Config exercising every section with non-default values
pub const SAMPLE_CONFIG: &str = r#"
[team]
max_team_size = 4

[simulation]
rate = 0.2
nudge = 0.01
stop_fraction = 0.95
max_iterations = 12
baseline = 0.65
target = { fixed = 0.9 }

[analytics]
success_threshold = 0.75

[time_limits]
low_secs = 30
medium_secs = 90
high_secs = 300
"#;

/// Config file on disk; removed when dropped
pub struct TempConfig {
    _dir: TempDir,
    pub path: PathBuf,
}

pub fn write_config(contents: &str) -> TempConfig {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asc.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    TempConfig { _dir: dir, path }
}

pub fn write_sample_config() -> TempConfig {
    write_config(SAMPLE_CONFIG)
}

pub fn setup_test_coordinator() -> Coordinator {
    Coordinator::new(AscConfig::new()).unwrap()
}

pub fn setup_fixed_target_coordinator(baseline: f64, target: f64) -> Coordinator {
    let config = AscConfig::new()
        .with_baseline(baseline)
        .with_target(TargetPolicy::Fixed(target));
    Coordinator::new(config).unwrap()
}

/// Ledger holding `(high, hub_and_spoke, 0.9)` then `(low, sequential, 0.5)`
pub fn two_record_ledger() -> PerformanceLedger {
    let mut ledger = PerformanceLedger::new();
    ledger.record(ComplexityTier::High, CollaborationPattern::HubAndSpoke, 0.9);
    ledger.record(ComplexityTier::Low, CollaborationPattern::Sequential, 0.5);
    ledger
}

pub fn assert_trace_well_formed(trace: &PerformanceTrace, max_iterations: usize) {
    assert!(trace.iterations() <= max_iterations, "too many steps: {trace:?}");
    assert!(
        trace.values().windows(2).all(|w| w[0] <= w[1]),
        "trace decreases: {trace:?}"
    );
    assert!(
        trace.values().iter().skip(1).all(|&v| v <= trace.target()),
        "trace overshoots: {trace:?}"
    );
}

pub fn assert_graph_matches_plan(graph: &TopologyGraph, plan: &TeamPlan) {
    assert_eq!(graph.node_count(), plan.team_size());
    assert_eq!(graph.roles(), plan.roles);
}
