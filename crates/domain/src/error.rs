//! Unified error types for the domain layer
//!
//! Most helpers in this crate trust their caller and have no error path.
//! The few that can fail report through [`DomainError`] so adapters don't
//! need to reach for String or anyhow.

use thiserror::Error;

use crate::value_objects::ColourParseError;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed (e.g., a zero-length quaternion)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for values that cannot be used as given.
    ///
    /// # Example
    /// ```ignore
    /// if length == 0.0 {
    ///     return Err(DomainError::validation("Cannot normalize a zero-length quaternion"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<ColourParseError> for DomainError {
    fn from(err: ColourParseError) -> Self {
        Self::Parse(err.to_string())
    }
}
