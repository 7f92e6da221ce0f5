//! Referential Guard
//!
//! Decides whether a catalog record may be deleted. The store evaluates the
//! guard inside the same critical section as the delete, so a product created
//! concurrently cannot slip in between the count and the removal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::catalog::aggregate::Product;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::{CategoryId, SupplierId};

/// Kinds of record protected by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardedEntity {
    /// Referenced by products through `category_id`.
    Category,
    /// Referenced by products through `supplier_id`.
    Supplier,
    /// Referenced by orders through `product_id`.
    Product,
}

impl GuardedEntity {
    /// Lower-case noun used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Supplier => "supplier",
            Self::Product => "product",
        }
    }

    /// What points at this kind of record.
    #[must_use]
    pub const fn dependents(&self) -> &'static str {
        match self {
            Self::Category | Self::Supplier => "Products",
            Self::Product => "Orders",
        }
    }
}

impl fmt::Display for GuardedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Stateless delete guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReferentialGuard;

impl ReferentialGuard {
    /// Number of products in `category_id`.
    #[must_use]
    pub fn count_category_references<'a>(
        category_id: &CategoryId,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> usize {
        products
            .into_iter()
            .filter(|p| p.is_in_category(category_id))
            .count()
    }

    /// Number of products supplied by `supplier_id`.
    #[must_use]
    pub fn count_supplier_references<'a>(
        supplier_id: &SupplierId,
        products: impl IntoIterator<Item = &'a Product>,
    ) -> usize {
        products
            .into_iter()
            .filter(|p| p.is_supplied_by(supplier_id))
            .count()
    }

    /// Returns true if nothing references the record.
    #[must_use]
    pub const fn can_delete(references: usize) -> bool {
        references == 0
    }

    /// Reject the delete if anything still references the record.
    ///
    /// # Errors
    ///
    /// Returns `ReferentialConflict` when `references > 0`.
    pub const fn ensure_deletable(
        entity: GuardedEntity,
        references: usize,
    ) -> Result<(), CatalogError> {
        if Self::can_delete(references) {
            Ok(())
        } else {
            Err(CatalogError::ReferentialConflict { entity, references })
        }
    }
}
