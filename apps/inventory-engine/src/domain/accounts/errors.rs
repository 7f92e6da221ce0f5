//! Account errors.

use std::fmt;

use crate::domain::shared::DomainError;

/// Errors raised by the account directory and access checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    /// A field failed validation.
    InvalidField {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// User not found.
    NotFound {
        /// User ID.
        user_id: String,
    },

    /// Another account already uses this email.
    DuplicateEmail {
        /// The conflicting email.
        email: String,
    },

    /// An admin attempted to delete their own account.
    SelfDeletion,

    /// The caller's role does not permit the action.
    Forbidden {
        /// Action that was attempted.
        action: &'static str,
    },

    /// The backing store failed.
    Storage {
        /// Error message.
        message: String,
    },
}

impl From<DomainError> for AccountError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => Self::InvalidField { field, message },
        }
    }
}

impl fmt::Display for AccountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidField { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::NotFound { .. } => write!(f, "User not found"),
            Self::DuplicateEmail { email } => write!(f, "User with email {email} already exists"),
            Self::SelfDeletion => write!(f, "You cannot delete your own account"),
            Self::Forbidden { action } => write!(f, "Not allowed to {action}"),
            Self::Storage { message } => write!(f, "Account storage error: {message}"),
        }
    }
}

impl std::error::Error for AccountError {}
