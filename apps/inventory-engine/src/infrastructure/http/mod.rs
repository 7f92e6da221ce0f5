//! HTTP/REST API adapter.
//!
//! Inbound adapter exposing the inventory endpoints and delegating to
//! application use cases.

mod controller;
mod cors;
mod request;
mod response;

pub use controller::{AppState, InventoryStore, create_router};
pub use cors::cors_layer;
pub use request::*;
pub use response::*;
