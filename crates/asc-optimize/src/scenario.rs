//! Named optimization scenarios

use crate::convergence::{ConvergenceSimulator, PerformanceTrace};
use serde::{Deserialize, Serialize};

/// What part of the team graph a scenario tunes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizationKind {
    /// Connections between agents
    Edge,
    /// Individual agent parameters
    Node,
}

/// A baseline/target pair to simulate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationScenario {
    /// Display name
    pub name: String,
    /// One-line description
    pub description: String,
    /// What is being tuned
    pub kind: OptimizationKind,
    /// Starting performance
    pub initial: f64,
    /// Target performance
    pub target: f64,
}

impl OptimizationScenario {
    /// Create a scenario
    #[must_use]
    pub fn new(name: impl Into<String>, kind: OptimizationKind, initial: f64, target: f64) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind,
            initial,
            target,
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Edge (0.65 → 0.85) and node (0.70 → 0.90) optimization
    #[must_use]
    pub fn standard() -> Vec<Self> {
        vec![
            Self::new("Edge Optimization", OptimizationKind::Edge, 0.65, 0.85)
                .with_description("Optimizing connections between agents"),
            Self::new("Node Optimization", OptimizationKind::Node, 0.70, 0.90)
                .with_description("Optimizing individual agent parameters"),
        ]
    }

    /// Simulate this scenario
    #[must_use]
    pub fn run(&self, simulator: &ConvergenceSimulator) -> ScenarioResult {
        let trace = simulator.simulate(self.initial, self.target);
        ScenarioResult {
            scenario: self.clone(),
            improvement: trace.improvement(),
            trace,
        }
    }
}

/// Outcome of one scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// The scenario that ran
    pub scenario: OptimizationScenario,
    /// Simulated trace
    pub trace: PerformanceTrace,
    /// `final - initial`
    pub improvement: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_scenarios_improve() {
        let sim = ConvergenceSimulator::default();
        let results: Vec<_> = OptimizationScenario::standard()
            .iter()
            .map(|s| s.run(&sim))
            .collect();

        assert_eq!(results.len(), 2);
        for r in &results {
            assert!(r.improvement > 0.0);
            assert!(r.trace.converged());
            assert_eq!(r.trace.initial(), r.scenario.initial);
        }
        assert_eq!(results[1].scenario.kind, OptimizationKind::Node);
    }
}
