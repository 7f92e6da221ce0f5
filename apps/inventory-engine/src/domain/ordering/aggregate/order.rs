//! Order Aggregate Root
//!
//! An order is immutable once placed. The unit price is captured from the
//! product at the moment stock is withdrawn and is never recomputed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ordering::errors::OrderError;
use crate::domain::ordering::value_objects::OrderStatus;
use crate::domain::shared::{Money, OrderId, ProductId, Quantity, Timestamp, UserId};

/// Command to place an order.
#[derive(Debug, Clone)]
pub struct PlaceOrderCommand {
    /// Product to order.
    pub product_id: ProductId,
    /// Caller placing the order.
    pub user_id: UserId,
    /// Requested units, as supplied by the client.
    pub quantity: Decimal,
}

impl PlaceOrderCommand {
    /// Validate the requested quantity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` unless the quantity is a whole number of at least 1.
    pub fn validate(&self) -> Result<Quantity, OrderError> {
        Ok(Quantity::from_decimal(self.quantity)?)
    }
}

/// Order Aggregate Root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    product_id: ProductId,
    user_id: UserId,
    quantity: Quantity,
    unit_price: Money,
    total_price: Money,
    order_date: Timestamp,
}

impl Order {
    /// Record a fulfilled order.
    ///
    /// `total_price` is always `quantity * unit_price`.
    ///
    /// # Errors
    ///
    /// Returns `TotalOverflow` if the total cannot be represented.
    pub fn place(
        product_id: ProductId,
        user_id: UserId,
        quantity: Quantity,
        unit_price: Money,
        order_date: Timestamp,
    ) -> Result<Self, OrderError> {
        let total_price =
            unit_price
                .checked_times(quantity)
                .ok_or_else(|| OrderError::TotalOverflow {
                    product_id: product_id.to_string(),
                    quantity: quantity.value(),
                })?;
        Ok(Self {
            id: OrderId::generate(),
            product_id,
            user_id,
            quantity,
            unit_price,
            total_price,
            order_date,
        })
    }

    /// Order ID.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Ordered product.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    /// User who placed the order.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Units ordered.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price captured at fulfillment.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// `quantity * unit_price`.
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total_price
    }

    /// When the order was placed.
    #[must_use]
    pub const fn order_date(&self) -> Timestamp {
        self.order_date
    }

    /// Display status derived from the quantity.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        OrderStatus::for_quantity(self.quantity)
    }

    /// Returns true if `user_id` placed this order.
    #[must_use]
    pub fn is_placed_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn command(quantity: Decimal) -> PlaceOrderCommand {
        PlaceOrderCommand {
            product_id: ProductId::new("p-1"),
            user_id: UserId::new("u-1"),
            quantity,
        }
    }

    #[test]
    fn validate_accepts_whole_quantity() {
        assert_eq!(command(dec!(2)).validate().unwrap().value(), 2);
    }

    #[test]
    fn validate_rejects_zero_and_fractions() {
        assert!(matches!(
            command(dec!(0)).validate(),
            Err(OrderError::InvalidQuantity { .. })
        ));
        assert!(matches!(
            command(dec!(1.5)).validate(),
            Err(OrderError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn total_is_quantity_times_unit_price() {
        let order = Order::place(
            ProductId::new("p-1"),
            UserId::new("u-1"),
            Quantity::try_new(2).unwrap(),
            Money::new(dec!(100)),
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(order.total_price(), Money::new(dec!(200)));
        assert_eq!(order.unit_price(), Money::new(dec!(100)));
        assert_eq!(order.status(), OrderStatus::Processing);
    }

    #[test]
    fn fractional_prices_stay_exact() {
        let order = Order::place(
            ProductId::new("p-1"),
            UserId::new("u-1"),
            Quantity::try_new(3).unwrap(),
            Money::new(dec!(19.99)),
            Timestamp::now(),
        )
        .unwrap();
        assert_eq!(order.total_price(), Money::new(dec!(59.97)));
    }

    #[test]
    fn unrepresentable_total_is_an_error() {
        let err = Order::place(
            ProductId::new("p-1"),
            UserId::new("u-1"),
            Quantity::try_new(2).unwrap(),
            Money::new(Decimal::MAX),
            Timestamp::now(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            OrderError::TotalOverflow {
                product_id: "p-1".to_string(),
                quantity: 2
            }
        );
    }

    #[test]
    fn ownership() {
        let order = Order::place(
            ProductId::new("p-1"),
            UserId::new("u-1"),
            Quantity::try_new(1).unwrap(),
            Money::new(dec!(1)),
            Timestamp::now(),
        )
        .unwrap();
        assert!(order.is_placed_by(&UserId::new("u-1")));
        assert!(!order.is_placed_by(&UserId::new("u-2")));
    }
}
