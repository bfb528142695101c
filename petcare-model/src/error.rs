use thiserror::Error;

/// Errors produced when a document or record breaks its shape contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("missing field at {path}")]
    MissingField { path: String },

    #[error("field at {path} is not a string")]
    NotAString { path: String },

    #[error("invalid date in {field}: {value:?}")]
    InvalidDate { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
