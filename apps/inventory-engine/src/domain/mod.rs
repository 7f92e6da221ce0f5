//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Entities and Aggregates**: Consistency boundaries with invariants
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//! - **Repository Traits**: Persistence abstractions (implemented in adapters)
//!
//! # Bounded Contexts
//!
//! - [`catalog`]: Categories, suppliers, products and the stock ledger
//! - [`ordering`]: Order fulfillment against stock
//! - [`accounts`]: Users, roles and caller identity
//! - [`reporting`]: Dashboard aggregation

pub mod accounts;
pub mod catalog;
pub mod ordering;
pub mod reporting;
pub mod shared;
