use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("malformed variable (expected KEY=VALUE): {0}")]
    MalformedVariable(String),
    #[error("invalid expansion rules: {0}")]
    InvalidRules(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
