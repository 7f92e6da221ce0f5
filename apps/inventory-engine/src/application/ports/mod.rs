//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! Repository ports for entities live with their bounded contexts in the
//! domain layer; the ports here serve application concerns only.

mod inventory_snapshot_port;
mod password_hasher_port;

pub use inventory_snapshot_port::{InventorySnapshotPort, SnapshotError};
#[cfg(test)]
pub use password_hasher_port::MockPasswordHasherPort;
pub use password_hasher_port::{PasswordHashError, PasswordHasherPort};
