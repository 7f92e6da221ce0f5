//! Order DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ordering::{Order, OrderStatus, PlaceOrderCommand};
use crate::domain::shared::{Money, ProductId, Timestamp, UserId};

/// DTO for placing an order.
///
/// The buyer is always the caller; any user ID in the body is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderDto {
    /// Product to order.
    pub product_id: String,
    /// Requested units.
    pub quantity: Decimal,
}

impl PlaceOrderDto {
    /// Convert to a domain command on behalf of `user_id`.
    #[must_use]
    pub fn to_command(&self, user_id: &UserId) -> PlaceOrderCommand {
        PlaceOrderCommand {
            product_id: ProductId::new(self.product_id.as_str()),
            user_id: user_id.clone(),
            quantity: self.quantity,
        }
    }
}

/// DTO representing an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    /// Order ID.
    pub id: String,
    /// Ordered product.
    pub product_id: String,
    /// Product name, if the product still resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    /// Category name of the product, if it resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    /// Buyer.
    pub user_id: String,
    /// Units ordered.
    pub quantity: u32,
    /// Unit price at the time of the order.
    pub unit_price: Money,
    /// Quantity times unit price.
    pub total_price: Money,
    /// When the order was placed.
    pub order_date: Timestamp,
    /// Display status.
    pub status: OrderStatus,
}

impl OrderDto {
    /// Create from domain Order.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            id: order.id().to_string(),
            product_id: order.product_id().to_string(),
            product_name: None,
            category_name: None,
            user_id: order.user_id().to_string(),
            quantity: order.quantity().value(),
            unit_price: order.unit_price(),
            total_price: order.total_price(),
            order_date: order.order_date(),
            status: order.status(),
        }
    }

    /// Attach product and category names.
    #[must_use]
    pub fn with_names(mut self, product_name: Option<String>, category_name: Option<String>) -> Self {
        self.product_name = product_name;
        self.category_name = category_name;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::Quantity;
    use rust_decimal_macros::dec;

    #[test]
    fn order_dto_serializes_status_and_totals() {
        let order = Order::place(
            ProductId::new("p-1"),
            UserId::new("u-1"),
            Quantity::try_new(3).unwrap(),
            Money::new(dec!(2.50)),
            Timestamp::now(),
        )
        .unwrap();
        let json = serde_json::to_value(OrderDto::from_order(&order)).unwrap();
        assert_eq!(json["status"], "Processing");
        assert_eq!(json["totalPrice"], "7.50");
        assert_eq!(json["quantity"], 3);
        assert!(json.get("productName").is_none());
    }

    #[test]
    fn command_uses_caller_identity() {
        let dto: PlaceOrderDto =
            serde_json::from_str(r#"{"productId":"p-1","quantity":2,"userId":"someone-else"}"#)
                .unwrap();
        let command = dto.to_command(&UserId::new("caller"));
        assert_eq!(command.user_id, UserId::new("caller"));
        assert_eq!(command.quantity, dec!(2));
    }
}
