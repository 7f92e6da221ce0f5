//! Product Aggregate Root
//!
//! A product carries the authoritative stock count. Stock only moves through
//! [`Product::update`] (admin correction) and [`Product::withdraw`] (order
//! fulfillment), and never below zero.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::{
    CategoryId, DomainError, Money, ProductId, Quantity, StockLevel, StockShortfall, SupplierId,
    Timestamp,
};

/// Editable fields of a product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub description: String,
    /// Current unit price. Must be positive.
    pub price: Money,
    /// Units on hand.
    pub stock: StockLevel,
    /// Owning category.
    pub category_id: CategoryId,
    /// Supplying vendor.
    pub supplier_id: SupplierId,
    /// Optional image URL or path.
    pub image: Option<String>,
}

impl ProductDetails {
    /// Trim and validate the fields.
    ///
    /// Reference existence is checked by the store, not here.
    ///
    /// # Errors
    ///
    /// Returns error if the name is blank or the price is not positive.
    pub fn normalized(self) -> Result<Self, CatalogError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::blank("name").into());
        }
        self.price.validate_as_price()?;
        let image = self
            .image
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty());
        Ok(Self {
            name,
            description: self.description.trim().to_string(),
            image,
            ..self
        })
    }
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    stock: StockLevel,
    category_id: CategoryId,
    supplier_id: SupplierId,
    image: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Product {
    /// Create a product with a generated ID.
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation.
    pub fn new(details: ProductDetails) -> Result<Self, CatalogError> {
        Self::with_id(ProductId::generate(), details)
    }

    /// Create a product with a caller-chosen ID (seed data).
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation.
    pub fn with_id(id: ProductId, details: ProductDetails) -> Result<Self, CatalogError> {
        let details = details.normalized()?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            name: details.name,
            description: details.description,
            price: details.price,
            stock: details.stock,
            category_id: details.category_id,
            supplier_id: details.supplier_id,
            image: details.image,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the editable fields, including an admin stock correction.
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation; the product is unchanged.
    pub fn update(&mut self, details: ProductDetails) -> Result<(), CatalogError> {
        let details = details.normalized()?;
        self.name = details.name;
        self.description = details.description;
        self.price = details.price;
        self.stock = details.stock;
        self.category_id = details.category_id;
        self.supplier_id = details.supplier_id;
        self.image = details.image;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Take `quantity` units out of stock.
    ///
    /// # Errors
    ///
    /// Returns the shortfall if stock is insufficient; stock is unchanged.
    pub fn withdraw(&mut self, quantity: Quantity) -> Result<(), StockShortfall> {
        self.stock = self.stock.withdraw(quantity)?;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Returns true if this product belongs to `category_id`.
    #[must_use]
    pub fn is_in_category(&self, category_id: &CategoryId) -> bool {
        &self.category_id == category_id
    }

    /// Returns true if this product is supplied by `supplier_id`.
    #[must_use]
    pub fn is_supplied_by(&self, supplier_id: &SupplierId) -> bool {
        &self.supplier_id == supplier_id
    }

    /// Product ID.
    #[must_use]
    pub const fn id(&self) -> &ProductId {
        &self.id
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Product description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current unit price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Units on hand.
    #[must_use]
    pub const fn stock(&self) -> StockLevel {
        self.stock
    }

    /// Owning category.
    #[must_use]
    pub const fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    /// Supplying vendor.
    #[must_use]
    pub const fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    /// Image reference.
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
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
