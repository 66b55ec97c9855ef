//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised when a domain invariant is violated.
///
/// The parsing and reconciliation paths never produce these; they only occur
/// for programmer-error-class violations such as an invalid state transition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' has invalid value: {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField {
            field: field.into(),
        }
    }

    /// Creates an invalid value validation error.
    pub fn invalid_value(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidValue {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
