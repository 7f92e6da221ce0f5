//! Domain errors shared by every bounded context.

use std::fmt;

/// Domain-level errors raised by value objects and entity constructors.
///
/// These errors are independent of infrastructure concerns. Each context
/// lifts them into its own error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid value for a field.
    InvalidValue {
        /// Field name.
        field: String,
        /// Error message.
        message: String,
    },
}

impl DomainError {
    /// Shorthand for a required text field left blank.
    #[must_use]
    pub fn blank(field: &str) -> Self {
        Self::InvalidValue {
            field: field.to_string(),
            message: format!("{field} is required"),
        }
    }

    /// Name of the offending field.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidValue { field, .. } => field,
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
