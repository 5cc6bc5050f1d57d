//! The workspace-wide [`GridError`] type.

use std::fmt;

/// Errors reported when a grid or a query on it is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An argument violates a precondition (zero dimension, index out of
    /// range, area overflow).
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        reason: String,
    },
}

impl GridError {
    /// Shorthand for [`GridError::InvalidArgument`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { name, reason } => {
                write!(f, "invalid argument `{name}`: {reason}")
            }
        }
    }
}

impl std::error::Error for GridError {}
