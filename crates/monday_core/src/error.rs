//! Argument validation errors.
//!
//! These are raised while an operation is being rendered, before any request
//! is sent.

use thiserror::Error;

/// An invalid or incomplete combination of arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgumentError {
    /// A parameter was set without the parameter it depends on.
    #[error("`{parameter}` requires `{requires}` to be set")]
    MissingCompanion {
        parameter: &'static str,
        requires: &'static str,
    },

    /// Two parameters that cannot be used in the same request were both set.
    #[error("`{first}` and `{second}` cannot be used in the same request")]
    Conflict {
        first: &'static str,
        second: &'static str,
    },

    /// A parameter value was rejected.
    #[error("invalid value for `{parameter}`: {reason}")]
    Invalid { parameter: String, reason: String },
}

impl ArgumentError {
    /// Creates an invalid-value error.
    pub fn invalid(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }
}
