//! Inventory Snapshot Port (Driven Port)
//!
//! Interface for reading one consistent copy of catalog and order state.

use async_trait::async_trait;

use crate::domain::reporting::InventorySnapshot;

/// Snapshot error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotError {
    /// The backing store failed.
    #[error("Snapshot storage error: {message}")]
    Storage { message: String },
}

/// Port for point-in-time reads used by reporting.
#[async_trait]
pub trait InventorySnapshotPort: Send + Sync {
    /// Copy categories, products and orders as of one instant.
    async fn snapshot(&self) -> Result<InventorySnapshot, SnapshotError>;
}
