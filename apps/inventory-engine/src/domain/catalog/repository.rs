//! Catalog Repository Trait
//!
//! Defines the persistence abstraction for categories, suppliers and products.
//! Implementations must run each method as one atomic unit: uniqueness checks,
//! reference checks and guarded deletes may not interleave with other writes.

use async_trait::async_trait;

use super::aggregate::{Category, CategoryDetails, Product, ProductDetails, Supplier, SupplierDetails};
use super::errors::CatalogError;
use crate::domain::shared::{CategoryId, ProductId, SupplierId};

/// Repository trait for catalog persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert a new category.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateName` if another category has the same name.
    async fn insert_category(&self, category: Category) -> Result<Category, CatalogError>;

    /// Replace a category's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `DuplicateName`.
    async fn update_category(
        &self,
        id: &CategoryId,
        details: CategoryDetails,
    ) -> Result<Category, CatalogError>;

    /// Find a category by ID.
    async fn find_category(&self, id: &CategoryId) -> Result<Option<Category>, CatalogError>;

    /// All categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError>;

    /// Delete a category no product references.
    ///
    /// The reference count is checked before existence.
    ///
    /// # Errors
    ///
    /// Returns `ReferentialConflict` or `NotFound`.
    async fn delete_category(&self, id: &CategoryId) -> Result<Category, CatalogError>;

    /// Insert a new supplier.
    async fn insert_supplier(&self, supplier: Supplier) -> Result<Supplier, CatalogError>;

    /// Replace a supplier's editable fields.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the supplier does not exist.
    async fn update_supplier(
        &self,
        id: &SupplierId,
        details: SupplierDetails,
    ) -> Result<Supplier, CatalogError>;

    /// Find a supplier by ID.
    async fn find_supplier(&self, id: &SupplierId) -> Result<Option<Supplier>, CatalogError>;

    /// All suppliers, ordered by name.
    async fn list_suppliers(&self) -> Result<Vec<Supplier>, CatalogError>;

    /// Delete a supplier no product references.
    ///
    /// # Errors
    ///
    /// Returns `ReferentialConflict` or `NotFound`.
    async fn delete_supplier(&self, id: &SupplierId) -> Result<Supplier, CatalogError>;

    /// Insert a new product after checking its category and supplier exist.
    ///
    /// # Errors
    ///
    /// Returns `InvalidReference` for a dangling category or supplier.
    async fn insert_product(&self, product: Product) -> Result<Product, CatalogError>;

    /// Replace a product's editable fields after checking its references.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `InvalidReference`.
    async fn update_product(
        &self,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<Product, CatalogError>;

    /// Find a product by ID.
    async fn find_product(&self, id: &ProductId) -> Result<Option<Product>, CatalogError>;

    /// All products, ordered by name.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Delete a product no order references.
    ///
    /// # Errors
    ///
    /// Returns `ReferentialConflict` or `NotFound`.
    async fn delete_product(&self, id: &ProductId) -> Result<Product, CatalogError>;
}
