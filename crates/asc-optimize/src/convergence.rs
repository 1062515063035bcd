//! Convergence simulation
//!
//! `current += (target - current) * rate + nudge`, clamped to `target`.
//!
//! For `initial < target` every step strictly increases the value, so the
//! trace is non-decreasing and bounded by the target. Termination is bounded
//! by `max_iterations` regardless of the policy values.

use crate::error::TraceError;
use serde::{Deserialize, Serialize};

/// Step policy of the simulator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepPolicy {
    /// Fraction of the remaining gap closed per step
    pub rate: f64,
    /// Constant added per step
    pub nudge: f64,
    /// Stop once `current >= target * stop_fraction`
    pub stop_fraction: f64,
    /// Hard cap on steps
    pub max_iterations: usize,
}

impl Default for StepPolicy {
    fn default() -> Self {
        Self {
            rate: 0.15,
            nudge: 0.01,
            stop_fraction: 0.95,
            max_iterations: 10,
        }
    }
}

/// Ordered performance values produced by one simulation
///
/// Never empty; values are non-decreasing and lie in `[0, 1]`. Deserializing
/// checks the same invariants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrace")]
pub struct PerformanceTrace {
    values: Vec<f64>,
    target: f64,
    stop_fraction: f64,
}

#[derive(Deserialize)]
struct RawTrace {
    values: Vec<f64>,
    target: f64,
    stop_fraction: f64,
}

impl TryFrom<RawTrace> for PerformanceTrace {
    type Error = TraceError;

    fn try_from(raw: RawTrace) -> Result<Self, Self::Error> {
        if raw.values.is_empty() {
            return Err(TraceError::Empty);
        }
        if let Some((step, &value)) = raw
            .values
            .iter()
            .enumerate()
            .find(|(_, v)| !(0.0..=1.0).contains(*v))
        {
            return Err(TraceError::ValueOutOfRange { step, value });
        }
        if let Some(step) = raw.values.windows(2).position(|w| w[1] < w[0]) {
            return Err(TraceError::Decreasing { step: step + 1 });
        }
        if !(0.0..=1.0).contains(&raw.target) {
            return Err(TraceError::TargetOutOfRange(raw.target));
        }
        if !(raw.stop_fraction.is_finite() && raw.stop_fraction >= 0.0) {
            return Err(TraceError::InvalidStopFraction(raw.stop_fraction));
        }
        Ok(Self {
            values: raw.values,
            target: raw.target,
            stop_fraction: raw.stop_fraction,
        })
    }
}

impl PerformanceTrace {
    /// All values, initial value first
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value before any step
    #[inline]
    #[must_use]
    pub fn initial(&self) -> f64 {
        self.values.first().copied().unwrap_or_default()
    }

    /// Value after the last step
    #[inline]
    #[must_use]
    pub fn final_value(&self) -> f64 {
        self.values.last().copied().unwrap_or_default()
    }

    /// Target the simulation approached
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Steps taken (trace length minus the initial value)
    #[inline]
    #[must_use]
    pub fn iterations(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    /// `final - initial`
    #[inline]
    #[must_use]
    pub fn improvement(&self) -> f64 {
        self.final_value() - self.initial()
    }

    /// Whether the final value reached the stop band
    #[inline]
    #[must_use]
    pub fn converged(&self) -> bool {
        self.final_value() >= self.target * self.stop_fraction
    }
}

/// Iterator over the values after each step
///
/// Yields nothing when `initial >= target`.
#[derive(Debug, Clone)]
pub struct ConvergenceSteps {
    current: f64,
    target: f64,
    policy: StepPolicy,
    taken: usize,
    done: bool,
}

impl ConvergenceSteps {
    fn new(initial: f64, target: f64, policy: StepPolicy) -> Self {
        Self {
            current: initial,
            target,
            policy,
            taken: 0,
            done: initial >= target,
        }
    }
}

impl Iterator for ConvergenceSteps {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done || self.taken >= self.policy.max_iterations {
            return None;
        }

        let step = (self.target - self.current) * self.policy.rate + self.policy.nudge;
        self.current = (self.current + step).min(self.target);
        self.taken += 1;

        if self.current >= self.target * self.policy.stop_fraction {
            self.done = true;
        }
        Some(self.current)
    }
}

/// Deterministic convergence simulator
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvergenceSimulator {
    policy: StepPolicy,
}

impl ConvergenceSimulator {
    /// Create simulator with `policy`
    ///
    /// Negative rate/nudge are treated as zero and the rate is capped at 1.
    #[inline]
    #[must_use]
    pub fn new(policy: StepPolicy) -> Self {
        Self {
            policy: StepPolicy {
                rate: sanitize(policy.rate).min(1.0),
                nudge: sanitize(policy.nudge),
                stop_fraction: sanitize(policy.stop_fraction),
                max_iterations: policy.max_iterations,
            },
        }
    }

    /// With a different iteration cap
    #[inline]
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.policy.max_iterations = max_iterations;
        self
    }

    /// Active policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &StepPolicy {
        &self.policy
    }

    /// Step iterator from `initial` toward `target`
    ///
    /// Inputs are clamped to `[0, 1]` first (NaN becomes 0).
    #[must_use]
    pub fn steps(&self, initial: f64, target: f64) -> ConvergenceSteps {
        let (initial, target) = self.bounded_inputs(initial, target);
        ConvergenceSteps::new(initial, target, self.policy)
    }

    /// Run a full simulation
    #[must_use]
    pub fn simulate(&self, initial: f64, target: f64) -> PerformanceTrace {
        let (initial, target) = self.bounded_inputs(initial, target);
        let mut values = vec![initial];
        values.extend(ConvergenceSteps::new(initial, target, self.policy));
        self.finish(values, target)
    }

    /// Run a full simulation, yielding to the scheduler between steps
    ///
    /// Produces exactly the trace [`simulate`](Self::simulate) would.
    pub async fn simulate_cooperative(&self, initial: f64, target: f64) -> PerformanceTrace {
        let (initial, target) = self.bounded_inputs(initial, target);
        let mut values = vec![initial];
        for value in ConvergenceSteps::new(initial, target, self.policy) {
            values.push(value);
            tokio::task::yield_now().await;
        }
        self.finish(values, target)
    }

    fn bounded_inputs(&self, initial: f64, target: f64) -> (f64, f64) {
        let bounded = (unit(initial), unit(target));
        if bounded != (initial, target) {
            tracing::warn!(initial, target, "simulation inputs clamped to [0, 1]");
        }
        bounded
    }

    fn finish(&self, values: Vec<f64>, target: f64) -> PerformanceTrace {
        let trace = PerformanceTrace {
            values,
            target,
            stop_fraction: self.policy.stop_fraction,
        };
        tracing::debug!(
            initial = trace.initial(),
            final_value = trace.final_value(),
            iterations = trace.iterations(),
            "simulated convergence"
        );
        trace
    }
}

/// Simulate with the default policy
#[inline]
#[must_use]
pub fn simulate(initial: f64, target: f64) -> PerformanceTrace {
    ConvergenceSimulator::default().simulate(initial, target)
}

fn unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn edge_optimization_scenario() {
        let trace = simulate(0.65, 0.85);
        assert_eq!(trace.initial(), 0.65);
        assert!(trace.iterations() <= 10);
        assert!(trace.final_value() >= 0.85 * 0.95);
        assert!(trace.final_value() <= 0.85);
        assert!(trace.values().windows(2).all(|w| w[0] <= w[1]));
        assert!(trace.converged());
    }

    #[test]
    fn first_step_matches_formula() {
        let trace = simulate(0.65, 0.85);
        let expected = 0.65 + (0.85 - 0.65) * 0.15 + 0.01;
        assert!((trace.values()[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn at_or_above_target_is_single_value() {
        assert_eq!(simulate(0.9, 0.9).values(), &[0.9]);
        assert_eq!(simulate(0.95, 0.9).values(), &[0.95]);
        assert_eq!(simulate(0.95, 0.9).iterations(), 0);
    }

    #[test]
    fn cap_stops_slow_policy() {
        let sim = ConvergenceSimulator::new(StepPolicy {
            rate: 0.0,
            nudge: 0.001,
            ..StepPolicy::default()
        });
        let trace = sim.simulate(0.1, 0.9);
        assert_eq!(trace.iterations(), 10);
        assert!(!trace.converged());
    }

    #[test]
    fn zero_cap_returns_initial_only() {
        let trace = ConvergenceSimulator::default()
            .with_max_iterations(0)
            .simulate(0.2, 0.9);
        assert_eq!(trace.values(), &[0.2]);
    }

    #[test]
    fn never_overshoots_target() {
        let sim = ConvergenceSimulator::new(StepPolicy {
            rate: 1.0,
            nudge: 0.5,
            stop_fraction: 1.0,
            max_iterations: 10,
        });
        let trace = sim.simulate(0.1, 0.3);
        assert_eq!(trace.values(), &[0.1, 0.3]);
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let trace = simulate(-1.0, f64::NAN);
        assert_eq!(trace.values(), &[0.0]);
        let trace = simulate(0.5, 7.0);
        assert_eq!(trace.target(), 1.0);
        assert!(trace.final_value() <= 1.0);
    }

    #[test]
    fn steps_iterator_matches_trace() {
        let sim = ConvergenceSimulator::default();
        let steps: Vec<f64> = sim.steps(0.7, 0.9).collect();
        assert_eq!(&sim.simulate(0.7, 0.9).values()[1..], steps.as_slice());
    }

    #[test]
    fn serialized_trace_reloads() {
        let trace = simulate(0.6, 0.88);
        let json = serde_json::to_string(&trace).unwrap();
        let reloaded: PerformanceTrace = serde_json::from_str(&json).unwrap();
        assert_eq!(reloaded.iterations(), trace.iterations());
        assert!(reloaded.converged());
    }

    #[test]
    fn malformed_traces_are_rejected() {
        let load = |json: &str| serde_json::from_str::<PerformanceTrace>(json).unwrap_err();

        let err = load(r#"{"values":[],"target":0.9,"stop_fraction":0.95}"#);
        assert!(err.to_string().contains("trace has no values"));

        let err = load(r#"{"values":[0.6,0.7,0.65],"target":0.9,"stop_fraction":0.95}"#);
        assert!(err.to_string().contains("step 2"));

        let err = load(r#"{"values":[0.6,1.4],"target":0.9,"stop_fraction":0.95}"#);
        assert!(err.to_string().contains("outside [0, 1]"));

        let err = load(r#"{"values":[0.6],"target":3.0,"stop_fraction":0.95}"#);
        assert!(err.to_string().contains("target 3"));

        let err = load(r#"{"values":[0.6],"target":0.9,"stop_fraction":-1.0}"#);
        assert!(err.to_string().contains("stop fraction"));
    }

    #[tokio::test]
    async fn cooperative_matches_sync() {
        let sim = ConvergenceSimulator::default();
        let sync = sim.simulate(0.6, 0.88);
        let coop = sim.simulate_cooperative(0.6, 0.88).await;
        assert_eq!(sync, coop);
    }
}
