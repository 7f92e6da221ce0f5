//! Seed data loader.
//!
//! Reads a JSON document of categories, suppliers, products and users and
//! inserts it through the repository ports, so seed records pass the same
//! validation and reference checks as API writes.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::application::ports::{PasswordHashError, PasswordHasherPort};
use crate::domain::accounts::{AccountError, Role, User, UserProfile, UserRepository};
use crate::domain::catalog::{
    CatalogError, CatalogRepository, Category, CategoryDetails, Product, ProductDetails, Supplier,
    SupplierDetails,
};
use crate::domain::shared::{CategoryId, Money, ProductId, StockLevel, SupplierId, UserId};

/// Errors raised while loading seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// Seed file could not be read.
    #[error("Failed to read seed file '{path}': {source}")]
    Read {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Seed file is not valid JSON for the expected shape.
    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A catalog record was rejected.
    #[error("Invalid seed catalog record: {0}")]
    Catalog(#[from] CatalogError),

    /// A user record was rejected.
    #[error("Invalid seed user: {0}")]
    Account(#[from] AccountError),

    /// A seed password could not be hashed.
    #[error("Failed to hash seed password: {0}")]
    Password(#[from] PasswordHashError),
}

#[derive(Debug, Deserialize)]
struct SeedCategory {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct SeedSupplier {
    id: String,
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    address: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedProduct {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
    price: Decimal,
    stock: Decimal,
    category_id: String,
    supplier_id: String,
    #[serde(default)]
    image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedUser {
    id: String,
    name: String,
    email: String,
    password: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    role: Role,
}

/// Parsed seed document.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    categories: Vec<SeedCategory>,
    suppliers: Vec<SeedSupplier>,
    products: Vec<SeedProduct>,
    users: Vec<SeedUser>,
}

/// Counts of records inserted from a seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Categories inserted.
    pub categories: usize,
    /// Suppliers inserted.
    pub suppliers: usize,
    /// Products inserted.
    pub products: usize,
    /// Users inserted.
    pub users: usize,
}

impl SeedData {
    /// Read and parse a seed file.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse seed data from a JSON string.
    pub fn from_json(content: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Insert every record. Categories and suppliers go first so product
    /// references resolve.
    pub async fn apply<S, H>(self, store: &S, hasher: &H) -> Result<SeedSummary, SeedError>
    where
        S: CatalogRepository + UserRepository,
        H: PasswordHasherPort + ?Sized,
    {
        let mut summary = SeedSummary::default();

        for seed in self.categories {
            let category = Category::with_id(
                CategoryId::new(seed.id),
                CategoryDetails {
                    name: seed.name,
                    description: seed.description,
                },
            )?;
            store.insert_category(category).await?;
            summary.categories += 1;
        }

        for seed in self.suppliers {
            let supplier = Supplier::with_id(
                SupplierId::new(seed.id),
                SupplierDetails {
                    name: seed.name,
                    email: seed.email,
                    phone: seed.phone,
                    address: seed.address,
                },
            )?;
            store.insert_supplier(supplier).await?;
            summary.suppliers += 1;
        }

        for seed in self.products {
            let product = Product::with_id(
                ProductId::new(seed.id),
                ProductDetails {
                    name: seed.name,
                    description: seed.description,
                    price: Money::new(seed.price),
                    stock: StockLevel::from_decimal(seed.stock).map_err(CatalogError::from)?,
                    category_id: CategoryId::new(seed.category_id),
                    supplier_id: SupplierId::new(seed.supplier_id),
                    image: seed.image,
                },
            )?;
            store.insert_product(product).await?;
            summary.products += 1;
        }

        for seed in self.users {
            let hash = hasher.hash(&seed.password)?;
            let user = User::with_id(
                UserId::new(seed.id),
                UserProfile {
                    name: seed.name,
                    email: seed.email,
                    address: seed.address,
                },
                hash,
                seed.role,
            )?;
            store.insert(user).await?;
            summary.users += 1;
        }

        Ok(summary)
    }
}
