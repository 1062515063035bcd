//! Coordinator configuration
//!
//! Every section and field is optional in TOML; missing values take the
//! defaults below.
//!
//! ```toml
//! [team]
//! max_team_size = 6
//!
//! [simulation]
//! rate = 0.15
//! nudge = 0.01
//! stop_fraction = 0.95
//! max_iterations = 10
//! baseline = 0.6
//! target = "predicted"      # or { fixed = 0.9 }
//!
//! [analytics]
//! success_threshold = 0.7
//!
//! [time_limits]
//! low_secs = 60
//! medium_secs = 180
//! high_secs = 600
//! ```

use crate::error::ConfigError;
use asc_analytics::DEFAULT_SUCCESS_THRESHOLD;
use asc_optimize::StepPolicy;
use asc_planning::{TimeLimits, MAX_TEAM_SIZE, MIN_TEAM_SIZE};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Coordinator configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AscConfig {
    /// Team formation limits
    pub team: TeamConfig,
    /// Convergence simulation inputs
    pub simulation: SimulationConfig,
    /// Outcome analytics
    pub analytics: AnalyticsConfig,
    /// Advisory per-tier time budgets
    pub time_limits: TimeLimits,
}

impl AscConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Check every value is within its allowed range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max = self.team.max_team_size;
        if !(MIN_TEAM_SIZE..=MAX_TEAM_SIZE).contains(&max) {
            return Err(ConfigError::invalid(
                "team.max_team_size",
                format!("{max} is outside {MIN_TEAM_SIZE}..={MAX_TEAM_SIZE}"),
            ));
        }

        let sim = &self.simulation;
        unit_interval("simulation.rate", sim.rate)?;
        unit_interval("simulation.stop_fraction", sim.stop_fraction)?;
        unit_interval("simulation.baseline", sim.baseline)?;
        if !sim.nudge.is_finite() || sim.nudge < 0.0 {
            return Err(ConfigError::invalid(
                "simulation.nudge",
                format!("{} must be finite and non-negative", sim.nudge),
            ));
        }
        if let TargetPolicy::Fixed(target) = sim.target {
            unit_interval("simulation.target.fixed", target)?;
        }

        unit_interval("analytics.success_threshold", self.analytics.success_threshold)?;
        Ok(())
    }

    /// With team size cap
    #[inline]
    #[must_use]
    pub fn with_max_team_size(mut self, max: usize) -> Self {
        self.team.max_team_size = max;
        self
    }

    /// With simulator step policy
    #[inline]
    #[must_use]
    pub fn with_step_policy(mut self, policy: StepPolicy) -> Self {
        self.simulation.rate = policy.rate;
        self.simulation.nudge = policy.nudge;
        self.simulation.stop_fraction = policy.stop_fraction;
        self.simulation.max_iterations = policy.max_iterations;
        self
    }

    /// With simulation starting performance
    #[inline]
    #[must_use]
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.simulation.baseline = baseline;
        self
    }

    /// With simulation target policy
    #[inline]
    #[must_use]
    pub fn with_target(mut self, target: TargetPolicy) -> Self {
        self.simulation.target = target;
        self
    }

    /// With success threshold
    #[inline]
    #[must_use]
    pub fn with_success_threshold(mut self, threshold: f64) -> Self {
        self.analytics.success_threshold = threshold;
        self
    }

    /// With time limits
    #[inline]
    #[must_use]
    pub fn with_time_limits(mut self, limits: TimeLimits) -> Self {
        self.time_limits = limits;
        self
    }
}

/// `[team]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TeamConfig {
    /// Upper bound on team size (1..=6)
    pub max_team_size: usize,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            max_team_size: MAX_TEAM_SIZE,
        }
    }
}

/// `[simulation]` section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Fraction of the remaining gap closed per step
    pub rate: f64,
    /// Constant added per step
    pub nudge: f64,
    /// Early stop once within this fraction of the target
    pub stop_fraction: f64,
    /// Hard cap on steps
    pub max_iterations: usize,
    /// Starting performance of every simulated team
    pub baseline: f64,
    /// How the simulation target is chosen
    pub target: TargetPolicy,
}

impl SimulationConfig {
    /// Step policy for the simulator
    #[inline]
    #[must_use]
    pub fn step_policy(&self) -> StepPolicy {
        StepPolicy {
            rate: self.rate,
            nudge: self.nudge,
            stop_fraction: self.stop_fraction,
            max_iterations: self.max_iterations,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let policy = StepPolicy::default();
        Self {
            rate: policy.rate,
            nudge: policy.nudge,
            stop_fraction: policy.stop_fraction,
            max_iterations: policy.max_iterations,
            baseline: 0.6,
            target: TargetPolicy::Predicted,
        }
    }
}

/// Simulation target selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetPolicy {
    /// Use the plan's predicted performance
    #[default]
    Predicted,
    /// Use the same target for every task
    Fixed(f64),
}

impl TargetPolicy {
    /// Resolve the target for a plan with `predicted` performance
    #[inline]
    #[must_use]
    pub fn resolve(self, predicted: f64) -> f64 {
        match self {
            Self::Predicted => predicted,
            Self::Fixed(target) => target,
        }
    }
}

/// `[analytics]` section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    /// Tasks finishing strictly above this count as successes
    pub success_threshold: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            success_threshold: DEFAULT_SUCCESS_THRESHOLD,
        }
    }
}

fn unit_interval(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} is outside [0, 1]")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text_is_default() {
        assert_eq!(AscConfig::from_toml_str("").unwrap(), AscConfig::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AscConfig::from_toml_str(
            r#"
            [team]
            max_team_size = 3

            [simulation]
            baseline = 0.65
            target = { fixed = 0.9 }
            "#,
        )
        .unwrap();

        assert_eq!(config.team.max_team_size, 3);
        assert_eq!(config.simulation.baseline, 0.65);
        assert_eq!(config.simulation.target, TargetPolicy::Fixed(0.9));
        assert_eq!(config.simulation.rate, 0.15);
        assert_eq!(config.analytics.success_threshold, 0.7);
        assert_eq!(config.time_limits, TimeLimits::default());
    }

    #[test]
    fn predicted_target_label() {
        let config = AscConfig::from_toml_str("[simulation]\ntarget = \"predicted\"\n").unwrap();
        assert_eq!(config.simulation.target, TargetPolicy::Predicted);
        assert_eq!(TargetPolicy::Predicted.resolve(0.82), 0.82);
        assert_eq!(TargetPolicy::Fixed(0.9).resolve(0.82), 0.9);
    }

    #[test]
    fn rejects_out_of_range_values() {
        let err = AscConfig::from_toml_str("[team]\nmax_team_size = 7\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "team.max_team_size", .. }));

        let err = AscConfig::from_toml_str("[simulation]\nrate = 1.5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "simulation.rate", .. }));

        let err = AscConfig::from_toml_str("[simulation]\ntarget = { fixed = 2.0 }\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "simulation.target.fixed", .. }));

        let err = AscConfig::new().with_success_threshold(-0.1).validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "analytics.success_threshold", .. }));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = AscConfig::from_toml_str("[team]\nsize = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let config = AscConfig::new()
            .with_max_team_size(4)
            .with_target(TargetPolicy::Fixed(0.88));
        let text = config.to_toml_string().unwrap();
        assert_eq!(AscConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn step_policy_mirrors_section() {
        let policy = StepPolicy {
            rate: 0.2,
            nudge: 0.0,
            stop_fraction: 0.9,
            max_iterations: 5,
        };
        let config = AscConfig::new().with_step_policy(policy);
        assert_eq!(config.simulation.step_policy(), policy);
    }
}
