//! Catalog DTOs

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::{
    Category, CategoryDetails, CatalogError, Product, ProductDetails, Supplier, SupplierDetails,
};
use crate::domain::shared::{CategoryId, Money, StockLevel, SupplierId, Timestamp};

/// DTO for creating or replacing a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveCategoryDto {
    /// Unique name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
}

impl SaveCategoryDto {
    /// Convert to domain details.
    #[must_use]
    pub fn into_details(self) -> CategoryDetails {
        CategoryDetails {
            name: self.name,
            description: self.description,
        }
    }
}

/// DTO representing a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    /// Category ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Created at.
    pub created_at: Timestamp,
    /// Updated at.
    pub updated_at: Timestamp,
}

impl CategoryDto {
    /// Create from domain Category.
    #[must_use]
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: category.id().to_string(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            created_at: category.created_at(),
            updated_at: category.updated_at(),
        }
    }
}

/// DTO for creating or replacing a supplier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveSupplierDto {
    /// Name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Postal address.
    pub address: String,
}

impl SaveSupplierDto {
    /// Convert to domain details.
    #[must_use]
    pub fn into_details(self) -> SupplierDetails {
        SupplierDetails {
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
        }
    }
}

/// DTO representing a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDto {
    /// Supplier ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Postal address.
    pub address: String,
    /// Created at.
    pub created_at: Timestamp,
}

impl SupplierDto {
    /// Create from domain Supplier.
    #[must_use]
    pub fn from_supplier(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id().to_string(),
            name: supplier.name().to_string(),
            email: supplier.email().to_string(),
            phone: supplier.phone().to_string(),
            address: supplier.address().to_string(),
            created_at: supplier.created_at(),
        }
    }
}

/// DTO for creating or replacing a product.
///
/// Price and stock arrive as decimals so that fractional or negative input
/// is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProductDto {
    /// Name.
    pub name: String,
    /// Description.
    #[serde(default)]
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Units on hand.
    pub stock: Decimal,
    /// Owning category.
    pub category_id: String,
    /// Supplying vendor.
    pub supplier_id: String,
    /// Optional image reference.
    #[serde(default)]
    pub image: Option<String>,
}

impl SaveProductDto {
    /// Convert to domain details.
    ///
    /// # Errors
    ///
    /// Returns `InvalidField` if the stock is not a non-negative integer.
    pub fn into_details(self) -> Result<ProductDetails, CatalogError> {
        Ok(ProductDetails {
            name: self.name,
            description: self.description,
            price: Money::new(self.price),
            stock: StockLevel::from_decimal(self.stock)?,
            category_id: CategoryId::new(self.category_id),
            supplier_id: SupplierId::new(self.supplier_id),
            image: self.image,
        })
    }
}

/// DTO representing a product, with its category and supplier names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    /// Product ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Units on hand.
    pub stock: u32,
    /// Category ID.
    pub category_id: String,
    /// Category name, if the category still resolves.
    pub category_name: Option<String>,
    /// Supplier ID.
    pub supplier_id: String,
    /// Supplier name, if the supplier still resolves.
    pub supplier_name: Option<String>,
    /// Image reference.
    pub image: Option<String>,
    /// Created at.
    pub created_at: Timestamp,
    /// Updated at.
    pub updated_at: Timestamp,
}

impl ProductDto {
    /// Create from domain Product without reference names.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            description: product.description().to_string(),
            price: product.price(),
            stock: product.stock().units(),
            category_id: product.category_id().to_string(),
            category_name: None,
            supplier_id: product.supplier_id().to_string(),
            supplier_name: None,
            image: product.image().map(str::to_string),
            created_at: product.created_at(),
            updated_at: product.updated_at(),
        }
    }

    /// Attach category and supplier names from lookup tables.
    #[must_use]
    pub fn with_names(
        mut self,
        categories: &HashMap<CategoryId, String>,
        suppliers: &HashMap<SupplierId, String>,
    ) -> Self {
        self.category_name = categories
            .get(&CategoryId::new(self.category_id.as_str()))
            .cloned();
        self.supplier_name = suppliers
            .get(&SupplierId::new(self.supplier_id.as_str()))
            .cloned();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_product_accepts_numbers_and_strings() {
        let dto: SaveProductDto = serde_json::from_str(
            r#"{"name":"Drill","price":"19.99","stock":3,"categoryId":"c1","supplierId":"s1"}"#,
        )
        .unwrap();
        let details = dto.into_details().unwrap();
        assert_eq!(details.stock.units(), 3);
        assert_eq!(details.price.to_string(), "19.99");
        assert!(details.image.is_none());
    }

    #[test]
    fn fractional_stock_is_invalid_field() {
        let dto: SaveProductDto = serde_json::from_str(
            r#"{"name":"Drill","price":1,"stock":1.5,"categoryId":"c1","supplierId":"s1"}"#,
        )
        .unwrap();
        let err = dto.into_details().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidField { ref field, .. } if field == "stock"));
    }

    #[test]
    fn product_dto_uses_camel_case() {
        let product = Product::new(ProductDetails {
            name: "Drill".to_string(),
            description: String::new(),
            price: Money::from_cents(1999),
            stock: StockLevel::new(2),
            category_id: CategoryId::new("c1"),
            supplier_id: SupplierId::new("s1"),
            image: None,
        })
        .unwrap();
        let categories = HashMap::from([(CategoryId::new("c1"), "Tools".to_string())]);
        let dto = ProductDto::from_product(&product).with_names(&categories, &HashMap::new());
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["categoryName"], "Tools");
        assert!(json["supplierName"].is_null());
        assert_eq!(json["price"], "19.99");
    }
}
