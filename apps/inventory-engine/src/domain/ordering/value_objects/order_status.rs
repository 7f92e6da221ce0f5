//! Display status of an order.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::Quantity;

/// Fulfillment label shown alongside an order.
///
/// Derived from the ordered quantity on every read and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Single-unit orders.
    Pending,
    /// Two to four units.
    Processing,
    /// Five units or more.
    Delivered,
}

impl OrderStatus {
    /// Label for an order of `quantity` units.
    #[must_use]
    pub const fn for_quantity(quantity: Quantity) -> Self {
        match quantity.value() {
            5.. => Self::Delivered,
            2..=4 => Self::Processing,
            _ => Self::Pending,
        }
    }

    /// Get the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Delivered => "Delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
