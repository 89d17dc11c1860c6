//! Error types for recipe resolution.

use thiserror::Error;

use ddm_condition::ConditionError;
use ddm_model::ModelId;

/// Errors raised while turning an identifier and a dataset into a specification.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("unknown model '{0}'")]
    UnknownModel(String),

    /// A conditioning step failed.
    #[error("conditioning failed: {0}")]
    Condition(#[from] ConditionError),

    /// A column the chosen variant needs is absent and no lower-detail
    /// variant applies.
    #[error("{model}: required column '{column}' is missing from the dataset")]
    DataIncomplete { model: ModelId, column: String },

    /// The recipe refuses this shape of dataset.
    #[error("{model} does not support this dataset: {reason}")]
    UnsupportedDesign { model: ModelId, reason: String },

    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ResolveError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for resolution.
pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_model() {
        let err = ResolveError::DataIncomplete {
            model: ModelId::RegressDcZPrevrespPrevrt,
            column: "prevrt".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "regress_dc_z_prevresp_prevrt: required column 'prevrt' is missing from the dataset"
        );
    }

    #[test]
    fn condition_errors_convert() {
        let err: ResolveError = ConditionError::StimulusCoding { levels: 1 }.into();
        assert!(matches!(
            err,
            ResolveError::Condition(ConditionError::StimulusCoding { levels: 1 })
        ));
    }
}
