//! Error types for objective generation

use thiserror::Error;

/// Failures surfaced to callers of the engine.
///
/// The generation pipeline itself cannot fail on non-empty input; these are
/// raised by the layers around it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObjectiveError {
    /// Goal was missing or blank
    #[error("{0}")]
    InvalidInput(String),
    /// Anything unexpected while producing or encoding a result
    #[error("internal error: {0}")]
    Internal(String),
}

impl ObjectiveError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ObjectiveError::InvalidInput(message.into())
    }

    pub fn internal(err: impl std::fmt::Display) -> Self {
        ObjectiveError::Internal(err.to_string())
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(self, ObjectiveError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, ObjectiveError>;
