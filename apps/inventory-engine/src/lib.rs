// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::needless_collect,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements,
        clippy::or_fun_call
    )
)]

//! Inventory Engine - Rust Core Library
//!
//! Inventory and order-management backend: a product catalog with
//! categories and suppliers, stock-checked order fulfillment, an account
//! directory and an aggregated dashboard.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic (entities, value objects, repository traits)
//!   - `catalog`: Categories, suppliers, products, stock levels, referential guard
//!   - `ordering`: Orders and the fulfillment command
//!   - `accounts`: Users, roles and caller identity
//!   - `reporting`: Dashboard aggregation over an inventory snapshot
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: Interfaces for password hashing and inventory snapshots
//!   - `use_cases`: `ManageCategories`, `ManageSuppliers`, `ManageProducts`,
//!     `PlaceOrder`, `ListOrders`, `ManageUsers`, `ComputeSummary`
//!   - `dto`: Data transfer objects for API boundaries
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `persistence`: In-memory inventory store and JSON seed loader
//!   - `security`: Argon2id password hasher
//!   - `http`: Axum REST API
//!   - `config`: Dependency injection container

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration with environment interpolation.
pub mod config;

/// Error taxonomy shared by every use case.
pub mod error;

/// Structured logging and Prometheus metrics.
pub mod observability;

// =============================================================================
// Re-exports
// =============================================================================

// Domain re-exports
pub use domain::accounts::{Caller, Role, User};
pub use domain::catalog::{Category, Product, Supplier};
pub use domain::ordering::Order;
pub use domain::reporting::DashboardSummary;
pub use domain::shared::{
    CategoryId, Money, OrderId, ProductId, StockLevel, SupplierId, Timestamp, UserId,
};

// Application re-exports
pub use application::use_cases::{
    ComputeSummaryUseCase, ListOrdersUseCase, ManageCategoriesUseCase, ManageProductsUseCase,
    ManageSuppliersUseCase, ManageUsersUseCase, PlaceOrderUseCase,
};

// Infrastructure re-exports
pub use error::{ErrorCode, ServiceError};
pub use infrastructure::config::Container;
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryInventoryStore;
pub use infrastructure::security::Argon2PasswordHasher;
