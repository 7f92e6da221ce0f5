//! Supplier entity.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::errors::CatalogError;
use crate::domain::shared::{DomainError, SupplierId, Timestamp};

/// Editable fields of a supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplierDetails {
    /// Company or contact name.
    pub name: String,
    /// Contact email; may be empty.
    pub email: String,
    /// Contact phone; may be empty.
    pub phone: String,
    /// Postal address; may be empty.
    pub address: String,
}

impl SupplierDetails {
    /// Trim and validate the fields.
    ///
    /// # Errors
    ///
    /// Returns error if the name is blank or a non-empty email has no `@`.
    pub fn normalized(self) -> Result<Self, CatalogError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::blank("name").into());
        }
        let email = self.email.trim().to_string();
        if !email.is_empty() && !email.contains('@') {
            return Err(DomainError::InvalidValue {
                field: "email".to_string(),
                message: format!("'{email}' is not an email address"),
            }
            .into());
        }
        Ok(Self {
            name,
            email,
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        })
    }
}

/// A supplier of catalog products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    id: SupplierId,
    name: String,
    email: String,
    phone: String,
    address: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Supplier {
    /// Create a supplier with a generated ID.
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation.
    pub fn new(details: SupplierDetails) -> Result<Self, CatalogError> {
        Self::with_id(SupplierId::generate(), details)
    }

    /// Create a supplier with a caller-chosen ID (seed data).
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation.
    pub fn with_id(id: SupplierId, details: SupplierDetails) -> Result<Self, CatalogError> {
        let details = details.normalized()?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            name: details.name,
            email: details.email,
            phone: details.phone,
            address: details.address,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the editable fields.
    ///
    /// # Errors
    ///
    /// Returns error if the details fail validation; the supplier is unchanged.
    pub fn update(&mut self, details: SupplierDetails) -> Result<(), CatalogError> {
        let details = details.normalized()?;
        self.name = details.name;
        self.email = details.email;
        self.phone = details.phone;
        self.address = details.address;
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Supplier ID.
    #[must_use]
    pub const fn id(&self) -> &SupplierId {
        &self.id
    }

    /// Supplier name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }
}
