//! Catalog domain services.

mod referential_guard;

pub use referential_guard::{GuardedEntity, ReferentialGuard};
