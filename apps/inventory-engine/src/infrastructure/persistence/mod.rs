//! Persistence Adapters
//!
//! In-memory implementation of the repository ports, plus a JSON seed loader.

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryInventoryStore;
pub use seed::{SeedData, SeedError, SeedSummary};
