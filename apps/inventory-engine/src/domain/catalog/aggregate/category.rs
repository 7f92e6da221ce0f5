//! Category entity.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::{CategoryId, DomainError, Timestamp};

/// Editable fields of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDetails {
    /// Display name; unique across categories.
    pub name: String,
    /// Free-text description.
    pub description: String,
}

impl CategoryDetails {
    /// Trim and validate the fields.
    ///
    /// # Errors
    ///
    /// Returns error if the name is blank.
    pub fn normalized(self) -> Result<Self, CatalogError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::blank("name").into());
        }
        Ok(Self {
            name,
            description: self.description.trim().to_string(),
        })
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Category {
    /// Create a category with a generated ID.
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation.
    pub fn new(details: CategoryDetails) -> Result<Self, CatalogError> {
        Self::with_id(CategoryId::generate(), details)
    }

    /// Create a category with a caller-chosen ID (seed data).
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation.
    pub fn with_id(id: CategoryId, details: CategoryDetails) -> Result<Self, CatalogError> {
        let details = details.normalized()?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            name: details.name,
            description: details.description,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the editable fields.
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation; the category is unchanged.
    pub fn update(&mut self, details: CategoryDetails) -> Result<(), CatalogError> {
        let details = details.normalized()?;
        self.name = details.name;
        self.description = details.description;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Category ID.
    #[must_use]
    pub const fn id(&self) -> &CategoryId {
        &self.id
    }

    /// Category name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Category description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Last modification time.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(name: &str) -> CategoryDetails {
        CategoryDetails {
            name: name.to_string(),
            description: "  things  ".to_string(),
        }
    }

    #[test]
    fn new_trims_fields() {
        let category = Category::new(details("  Tools ")).unwrap();
        assert_eq!(category.name(), "Tools");
        assert_eq!(category.description(), "things");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Category::new(details("   ")).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField { .. }));
    }

    #[test]
    fn update_keeps_identity() {
        let mut category = Category::new(details("Tools")).unwrap();
        let id = category.id().clone();
        category.update(details("Hardware")).unwrap();
        assert_eq!(category.id(), &id);
        assert_eq!(category.name(), "Hardware");
        assert!(category.updated_at() >= category.created_at());
    }

    #[test]
    fn failed_update_leaves_category_unchanged() {
        let mut category = Category::new(details("Tools")).unwrap();
        assert!(category.update(details("")).is_err());
        assert_eq!(category.name(), "Tools");
    }
}
