//! Error types for dataset conditioning.

use thiserror::Error;

/// Errors raised by the conditioning transforms.
#[derive(Debug, Error)]
pub enum ConditionError {
    /// Recoded stimulus does not have exactly two identities.
    #[error("stimulus coding needs 2 stimulus types, found {levels}")]
    StimulusCoding { levels: usize },

    /// A column the transform reads is not in the table.
    #[error("column '{column}' not found in trial table")]
    MissingColumn { column: String },

    /// One-shot transform requested a second time on the same table.
    #[error("transform already applied: {transform}")]
    AlreadyApplied { transform: String },

    /// Session label without an entry in the explicit session map.
    #[error("session label {label} has no entry in the session map")]
    UnmappedSession { label: i64 },

    #[error("invalid session map '{input}': {reason}")]
    InvalidSessionMap { input: String, reason: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ConditionError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for conditioning operations.
pub type Result<T> = std::result::Result<T, ConditionError>;
