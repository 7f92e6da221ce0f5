//! Catalog entities.

mod category;
mod product;
mod supplier;

pub use category::{Category, CategoryDetails};
pub use product::{Product, ProductDetails};
pub use supplier::{Supplier, SupplierDetails};
