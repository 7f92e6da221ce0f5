//! Order Repository Trait
//!
//! Defines the persistence abstraction for orders, including the atomic
//! stock-decrement-and-insert used by fulfillment.

use async_trait::async_trait;

use super::aggregate::Order;
use super::errors::OrderError;
use crate::domain::shared::{OrderId, ProductId, Quantity, Timestamp, UserId};

/// Everything the store needs to fulfill an order.
#[derive(Debug, Clone)]
pub struct FulfillmentRequest {
    /// Product to withdraw from.
    pub product_id: ProductId,
    /// Caller placing the order.
    pub user_id: UserId,
    /// Units to withdraw.
    pub quantity: Quantity,
    /// Order timestamp.
    pub placed_at: Timestamp,
}

/// Repository trait for Order persistence.
///
/// This is a domain interface (port) that is implemented by
/// infrastructure adapters.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Withdraw stock and record the order as one atomic unit.
    ///
    /// Stock is re-checked at apply time and the unit price is read from the
    /// product at that moment. On any error neither stock nor orders change.
    ///
    /// # Errors
    ///
    /// Returns `ProductNotFound` or `InsufficientStock`.
    async fn fulfill(&self, request: FulfillmentRequest) -> Result<Order, OrderError>;

    /// Find an order by ID.
    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    /// All orders, newest first.
    async fn list_all(&self) -> Result<Vec<Order>, OrderError>;

    /// Orders placed by `user_id`, newest first.
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Order>, OrderError>;
}
