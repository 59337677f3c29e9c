//! Error types shared by the catalog routines.

use thiserror::Error;

/// Errors raised when a routine is called with parameters it cannot honor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgoError {
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("integer overflow while computing {operation}")]
    Overflow { operation: &'static str },
}

impl AlgoError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let err = AlgoError::InvalidArgument {
            name,
            reason: reason.into(),
        };
        tracing::debug!(%err, "rejected argument");
        err
    }
}

/// Result type for catalog operations.
pub type AlgoResult<T> = Result<T, AlgoError>;
