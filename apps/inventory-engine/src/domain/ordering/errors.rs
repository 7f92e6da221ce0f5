//! Order fulfillment errors.

use std::fmt;

use crate::domain::shared::{DomainError, StockShortfall};

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Requested quantity is not a whole number of at least 1.
    InvalidQuantity {
        /// Error message.
        message: String,
    },

    /// The ordered product does not exist.
    ProductNotFound {
        /// Product ID.
        product_id: String,
    },

    /// Not enough stock to cover the order.
    InsufficientStock {
        /// Product ID.
        product_id: String,
        /// Units requested.
        requested: u32,
        /// Units on hand when the order was evaluated.
        available: u32,
    },

    /// `quantity * unit_price` does not fit in a monetary amount.
    TotalOverflow {
        /// Product ID.
        product_id: String,
        /// Units requested.
        quantity: u32,
    },

    /// Order not found (or not visible to the caller).
    NotFound {
        /// Order ID.
        order_id: String,
    },

    /// The backing store failed.
    Storage {
        /// Error message.
        message: String,
    },
}

impl OrderError {
    /// Build an `InsufficientStock` error from a ledger shortfall.
    #[must_use]
    pub fn insufficient(product_id: impl Into<String>, shortfall: StockShortfall) -> Self {
        Self::InsufficientStock {
            product_id: product_id.into(),
            requested: shortfall.requested,
            available: shortfall.available,
        }
    }
}

impl From<DomainError> for OrderError {
    fn from(err: DomainError) -> Self {
        Self::InvalidQuantity {
            message: err.to_string(),
        }
    }
}

impl fmt::Display for OrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuantity { message } => write!(f, "{message}"),
            Self::ProductNotFound { .. } => write!(f, "Product not found"),
            Self::InsufficientStock {
                requested,
                available,
                ..
            } => write!(
                f,
                "Insufficient stock: requested {requested}, available {available}"
            ),
            Self::TotalOverflow { quantity, .. } => {
                write!(f, "Order total for {quantity} units is out of range")
            }
            Self::NotFound { .. } => write!(f, "Order not found"),
            Self::Storage { message } => write!(f, "Order storage error: {message}"),
        }
    }
}

impl std::error::Error for OrderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_display() {
        let err = OrderError::insufficient(
            "p-1",
            StockShortfall {
                requested: 2,
                available: 1,
            },
        );
        assert_eq!(
            err.to_string(),
            "Insufficient stock: requested 2, available 1"
        );
    }

    #[test]
    fn domain_error_becomes_invalid_quantity() {
        let err: OrderError = DomainError::InvalidValue {
            field: "quantity".to_string(),
            message: "Quantity must be at least 1".to_string(),
        }
        .into();
        assert!(matches!(err, OrderError::InvalidQuantity { .. }));
    }
}
