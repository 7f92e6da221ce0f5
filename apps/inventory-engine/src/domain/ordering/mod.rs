//! Ordering Bounded Context
//!
//! Order fulfillment against the stock ledger.
//!
//! # Key Concepts
//!
//! - **Order Aggregate**: immutable record with `total = quantity * unit_price`
//! - **Fulfillment**: conditional stock decrement and order insert, all or nothing
//! - **Status**: display label derived from quantity

pub mod aggregate;
pub mod errors;
pub mod repository;
pub mod value_objects;

pub use aggregate::{Order, PlaceOrderCommand};
pub use errors::OrderError;
pub use repository::{FulfillmentRequest, OrderRepository};
pub use value_objects::OrderStatus;
