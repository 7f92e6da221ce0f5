//! Catalog Bounded Context
//!
//! Categories, suppliers and products, the stock ledger carried on each
//! product, and the referential guard protecting deletes.

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod services;

pub use aggregate::{Category, CategoryDetails, Product, ProductDetails, Supplier, SupplierDetails};
pub use errors::CatalogError;
pub use repository::CatalogRepository;
#[cfg(test)]
pub use repository::MockCatalogRepository;
pub use services::{GuardedEntity, ReferentialGuard};
