//! Adaptive team coordinator
//!
//! Runs one task through every stage:
//! 1. Classify the query into a tier and required skills
//! 2. Form a team and pick its collaboration pattern
//! 3. Wire the team into a communication graph
//! 4. Simulate convergence from the baseline toward the target
//! 5. Record the outcome in the shared ledger
//!
//! Stages one to four share nothing mutable, so independent tasks run fully in
//! parallel. Recording is the only point where pipelines serialize.

use crate::config::AscConfig;
use crate::error::{AscError, AscResult, ConfigError};
use asc_analytics::{Analytics, AnalyticsRecord, PerformanceLedger, SharedLedger};
use asc_catalog::CapabilityCatalog;
use asc_optimize::{ConvergenceSimulator, PerformanceTrace};
use asc_planning::{ComplexityClassifier, TaskDescriptor, TeamPlan, TeamPlanner, DEFAULT_DOMAIN};
use asc_topology::{build_graph, TopologyGraph};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One query to coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    /// Query text
    pub query: String,
    /// Problem domain
    pub domain: String,
}

impl TaskRequest {
    /// Request in the default domain
    #[inline]
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }

    /// With domain
    #[inline]
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Reject blank queries
    pub fn validate(&self) -> AscResult<()> {
        if self.query.trim().is_empty() {
            return Err(AscError::InvalidRequest("query is empty".to_string()));
        }
        Ok(())
    }
}

/// Everything produced for one task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskOutcome {
    /// Classified task
    pub task: TaskDescriptor,
    /// Formed team
    pub plan: TeamPlan,
    /// Team communication graph
    pub graph: TopologyGraph,
    /// Simulated performance trace
    pub trace: PerformanceTrace,
    /// Last value of the trace
    pub final_performance: f64,
    /// `final_performance` above the success threshold
    pub success: bool,
}

impl TaskOutcome {
    /// Ledger entry for this outcome
    #[inline]
    #[must_use]
    pub fn record(&self) -> AnalyticsRecord {
        AnalyticsRecord {
            tier: self.task.tier(),
            pattern: self.plan.pattern,
            final_performance: self.final_performance,
            success: self.success,
        }
    }
}

/// Pipeline driver with a shared outcome ledger
#[derive(Debug, Clone)]
pub struct Coordinator {
    config: AscConfig,
    classifier: ComplexityClassifier,
    planner: TeamPlanner,
    simulator: ConvergenceSimulator,
    ledger: SharedLedger,
}

impl Coordinator {
    /// Create coordinator over the standard catalog
    pub fn new(config: AscConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, CapabilityCatalog::shared())
    }

    /// Create coordinator over a custom catalog
    pub fn with_catalog(
        config: AscConfig,
        catalog: Arc<CapabilityCatalog>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, catalog))
    }

    fn build(config: AscConfig, catalog: Arc<CapabilityCatalog>) -> Self {
        let planner = TeamPlanner::new(catalog).with_max_team_size(config.team.max_team_size);
        let simulator = ConvergenceSimulator::new(config.simulation.step_policy());
        let ledger = SharedLedger::new(PerformanceLedger::with_success_threshold(
            config.analytics.success_threshold,
        ));
        Self {
            config,
            classifier: ComplexityClassifier::new(),
            planner,
            simulator,
            ledger,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &AscConfig {
        &self.config
    }

    /// Catalog the planner selects roles from
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &CapabilityCatalog {
        self.planner.catalog()
    }

    /// Shared outcome ledger
    #[inline]
    #[must_use]
    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    /// Analytics over every task processed so far
    #[inline]
    #[must_use]
    pub fn report(&self) -> Analytics {
        self.ledger.report()
    }

    /// Run the full pipeline for one query
    ///
    /// Total: blank queries are classified like any other text.
    pub fn process(&self, query: &str, domain: &str) -> TaskOutcome {
        let (task, plan, graph, target) = self.prepare(query, domain);
        let trace = self.simulator.simulate(self.config.simulation.baseline, target);
        self.finish(task, plan, graph, trace)
    }

    /// Validate the request, then run the full pipeline
    pub fn try_process(&self, request: &TaskRequest) -> AscResult<TaskOutcome> {
        request.validate()?;
        Ok(self.process(&request.query, &request.domain))
    }

    /// Run the full pipeline, yielding to the runtime between simulation steps
    pub async fn process_cooperative(&self, query: &str, domain: &str) -> TaskOutcome {
        let (task, plan, graph, target) = self.prepare(query, domain);
        let trace = self
            .simulator
            .simulate_cooperative(self.config.simulation.baseline, target)
            .await;
        self.finish(task, plan, graph, trace)
    }

    /// Run pipelines in parallel
    ///
    /// Outcomes come back in request order; ledger order follows completion.
    pub fn process_batch(&self, requests: &[TaskRequest]) -> Vec<TaskOutcome> {
        tracing::info!(count = requests.len(), "processing batch");
        requests
            .par_iter()
            .map(|req| self.process(&req.query, &req.domain))
            .collect()
    }

    fn prepare(&self, query: &str, domain: &str) -> (TaskDescriptor, TeamPlan, TopologyGraph, f64) {
        let task =
            TaskDescriptor::classify(&self.classifier, query, domain, &self.config.time_limits);
        let plan = self.planner.form_team(task.tier(), task.required_skills());
        let graph = build_graph(&plan.roles, plan.pattern);
        let target = self.config.simulation.target.resolve(plan.predicted_performance);
        (task, plan, graph, target)
    }

    fn finish(
        &self,
        task: TaskDescriptor,
        plan: TeamPlan,
        graph: TopologyGraph,
        trace: PerformanceTrace,
    ) -> TaskOutcome {
        let final_performance = trace.final_value();
        let record = self.ledger.record(task.tier(), plan.pattern, final_performance);

        tracing::info!(
            task_id = %task.id(),
            tier = %task.tier(),
            team_size = plan.team_size(),
            pattern = %plan.pattern,
            final_performance,
            success = record.success,
            "processed task"
        );

        TaskOutcome {
            task,
            plan,
            graph,
            trace,
            final_performance,
            success: record.success,
        }
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::build(AscConfig::default(), CapabilityCatalog::shared())
    }
}
