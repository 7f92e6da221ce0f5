//! Catalog errors.

use std::fmt;

use super::services::GuardedEntity;
use crate::domain::shared::DomainError;

/// Errors that can occur while maintaining the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A field failed validation.
    InvalidField {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// The addressed record does not exist.
    NotFound {
        /// Entity kind ("Category", "Supplier", "Product").
        entity: &'static str,
        /// Requested identifier.
        id: String,
    },

    /// Another category already uses this name.
    DuplicateName {
        /// The conflicting name.
        name: String,
    },

    /// A product points at a category or supplier that does not exist.
    InvalidReference {
        /// Reference field ("categoryId" or "supplierId").
        field: &'static str,
        /// The dangling identifier.
        id: String,
    },

    /// The record is still referenced and cannot be deleted.
    ReferentialConflict {
        /// Kind of record being deleted.
        entity: GuardedEntity,
        /// Number of records still pointing at it.
        references: usize,
    },

    /// The backing store failed.
    Storage {
        /// Error message.
        message: String,
    },
}

impl From<DomainError> for CatalogError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => Self::InvalidField { field, message },
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidField { field, message } => {
                write!(f, "Invalid value for '{field}': {message}")
            }
            Self::NotFound { entity, .. } => write!(f, "{entity} not found"),
            Self::DuplicateName { name } => write!(f, "Category '{name}' already exists"),
            Self::InvalidReference { field, id } => {
                write!(f, "Referenced record does not exist: {field}={id}")
            }
            Self::ReferentialConflict { entity, .. } => write!(
                f,
                "Cannot delete {} associated with {}",
                entity.label(),
                entity.dependents()
            ),
            Self::Storage { message } => write!(f, "Catalog storage error: {message}"),
        }
    }
}

impl std::error::Error for CatalogError {}
