//! Trace validation errors

use thiserror::Error;

/// Why a serialized trace was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// No values at all
    #[error("trace has no values")]
    Empty,

    /// A value outside `[0, 1]` (or NaN)
    #[error("value {value} at step {step} is outside [0, 1]")]
    ValueOutOfRange {
        /// Index into the trace
        step: usize,
        /// Offending value
        value: f64,
    },

    /// A value below its predecessor
    #[error("value at step {step} is below the previous value")]
    Decreasing {
        /// Index into the trace
        step: usize,
    },

    /// Target outside `[0, 1]` (or NaN)
    #[error("target {0} is outside [0, 1]")]
    TargetOutOfRange(f64),

    /// Negative or non-finite stop fraction
    #[error("stop fraction {0} must be finite and non-negative")]
    InvalidStopFraction(f64),
}
