use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Identifier is not one of the catalogued recipes.
    #[error("unknown model: {0}")]
    UnknownModel(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
