//! Research-assistant demo run
//!
//! Five representative research queries of increasing complexity, the two
//! standard optimization scenarios, and the resulting analytics.

use crate::coordinator::{Coordinator, TaskOutcome, TaskRequest};
use asc_analytics::Analytics;
use asc_optimize::{ConvergenceSimulator, OptimizationScenario, ScenarioResult};
use serde::{Deserialize, Serialize};

/// Demo queries, simplest first
pub const DEMO_QUERIES: [&str; 5] = [
    "What is machine learning?",
    "Compare the effectiveness of renewable energy sources in reducing carbon emissions",
    "Analyze the impact of AI on healthcare delivery, including case studies and future implications",
    "Design an algorithm for optimizing urban traffic flow using real-time data",
    "Synthesize research on quantum computing applications in cryptography and propose novel approaches",
];

/// Demo queries as requests in the default domain
#[must_use]
pub fn demo_requests() -> Vec<TaskRequest> {
    DEMO_QUERIES.iter().map(|q| TaskRequest::new(*q)).collect()
}

/// Everything the demo produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoReport {
    /// One outcome per demo query, in query order
    pub outcomes: Vec<TaskOutcome>,
    /// Standard optimization scenarios
    pub scenarios: Vec<ScenarioResult>,
    /// Analytics over the coordinator's ledger after the run
    pub analytics: Analytics,
    /// Insights derived from the analytics
    pub insights: Vec<String>,
}

/// Run the demo queries and scenarios through `coordinator`
///
/// Queries are processed one after another so the ledger order matches
/// query order.
#[must_use]
pub fn run_demo(coordinator: &Coordinator) -> DemoReport {
    let outcomes: Vec<TaskOutcome> = demo_requests()
        .iter()
        .map(|req| coordinator.process(&req.query, &req.domain))
        .collect();

    let simulator = ConvergenceSimulator::new(coordinator.config().simulation.step_policy());
    let scenarios = OptimizationScenario::standard()
        .iter()
        .map(|s| s.run(&simulator))
        .collect();

    let analytics = coordinator.report();
    let insights = analytics
        .summary()
        .map(|s| s.insights().into_iter().map(str::to_string).collect())
        .unwrap_or_default();

    DemoReport {
        outcomes,
        scenarios,
        analytics,
        insights,
    }
}
