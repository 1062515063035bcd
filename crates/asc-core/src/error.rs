//! Error types for ASC Core
//!
//! The pipeline stages themselves are total. Errors only arise at the edges:
//! - Loading or validating configuration
//! - Parsing user-supplied labels
//! - Rejecting blank requests before they enter the pipeline

use asc_catalog::ParseLabelError;
use std::path::PathBuf;

/// Main ASC error type
#[derive(Debug, thiserror::Error)]
pub enum AscError {
    /// Configuration could not be loaded or is invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A role, skill, pattern or tier label was not recognised
    #[error(transparent)]
    Label(#[from] ParseLabelError),

    /// Request rejected before classification
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl AscError {
    /// Check if error is retryable
    #[inline]
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Config(ConfigError::Io { .. }))
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for [`AscConfig`](crate::AscConfig)
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is outside its allowed range
    #[error("invalid value for {field}: {reason}")]
    Invalid {
        /// Dotted field name, e.g. `simulation.rate`
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ConfigError {
    /// Create an invalid-value error
    #[inline]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Result alias for ASC operations
pub type AscResult<T> = Result<T, AscError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_errors() {
        let io = ConfigError::Io {
            path: "asc.toml".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(AscError::from(io).is_retryable());
        assert!(!AscError::InvalidRequest("empty".into()).is_retryable());
        assert!(!AscError::from(ConfigError::invalid("team.max_team_size", "0")).is_retryable());
    }

    #[test]
    fn label_error_passes_through() {
        let err = AscError::from(ParseLabelError::new("pattern", "ring"));
        assert_eq!(err.to_string(), "unknown pattern label: \"ring\"");
    }

    #[test]
    fn invalid_display_names_field() {
        let err = ConfigError::invalid("simulation.rate", "must be in [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid value for simulation.rate: must be in [0, 1]"
        );
    }
}
