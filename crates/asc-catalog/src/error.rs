//! Label parsing errors

/// A textual label did not name any known variant
///
/// Shared by every label type in the workspace (skills, roles, tiers,
/// strategies, patterns) so collaborators see one error shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {value:?}")]
pub struct ParseLabelError {
    /// Which label family was being parsed
    pub kind: &'static str,
    /// The rejected input
    pub value: String,
}

impl ParseLabelError {
    /// Create a new parse error
    #[inline]
    #[must_use]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
