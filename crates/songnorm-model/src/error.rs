use thiserror::Error;

/// Errors raised while constructing model values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// Identifier does not carry the expected prefix followed by digits.
    #[error("invalid {kind} identifier: {value:?}")]
    InvalidIdentifier { kind: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
