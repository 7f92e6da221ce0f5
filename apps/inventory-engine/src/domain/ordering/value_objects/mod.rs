//! Ordering Value Objects

mod order_status;

pub use order_status::OrderStatus;
