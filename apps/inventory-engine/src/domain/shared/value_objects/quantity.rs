//! Order quantities and stock levels.
//!
//! Both are whole units. Stock is unsigned, so it cannot go below zero;
//! a withdrawal that would do so is reported as a [`StockShortfall`].

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

/// A requested number of units on an order. Always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity from a whole number of units.
    ///
    /// # Errors
    ///
    /// Returns error if `units` is zero.
    pub fn try_new(units: u32) -> Result<Self, DomainError> {
        if units == 0 {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: "Quantity must be at least 1".to_string(),
            });
        }
        Ok(Self(units))
    }

    /// Parse a quantity from a client-supplied decimal.
    ///
    /// # Errors
    ///
    /// Returns error if the value is fractional, below 1, or too large.
    pub fn from_decimal(value: Decimal) -> Result<Self, DomainError> {
        if !value.fract().is_zero() {
            return Err(DomainError::InvalidValue {
                field: "quantity".to_string(),
                message: format!("Quantity must be a whole number, got {value}"),
            });
        }
        let units = value.to_u32().ok_or_else(|| DomainError::InvalidValue {
            field: "quantity".to_string(),
            message: format!("Quantity must be a positive whole number, got {value}"),
        })?;
        Self::try_new(units)
    }

    /// Number of units.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Units of a product on hand.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StockLevel(u32);

/// A withdrawal asked for more units than were on hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockShortfall {
    /// Units requested.
    pub requested: u32,
    /// Units available at the time of the request.
    pub available: u32,
}

impl StockLevel {
    /// Empty stock.
    pub const ZERO: Self = Self(0);

    /// Create a stock level.
    #[must_use]
    pub const fn new(units: u32) -> Self {
        Self(units)
    }

    /// Parse a stock level from a client-supplied decimal.
    ///
    /// # Errors
    ///
    /// Returns error if the value is negative, fractional or too large.
    pub fn from_decimal(value: Decimal) -> Result<Self, DomainError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidValue {
                field: "stock".to_string(),
                message: format!("Stock cannot be negative, got {value}"),
            });
        }
        if !value.fract().is_zero() {
            return Err(DomainError::InvalidValue {
                field: "stock".to_string(),
                message: format!("Stock must be a whole number, got {value}"),
            });
        }
        value
            .to_u32()
            .map(Self)
            .ok_or_else(|| DomainError::InvalidValue {
                field: "stock".to_string(),
                message: format!("Stock is out of range: {value}"),
            })
    }

    /// Units on hand.
    #[must_use]
    pub const fn units(&self) -> u32 {
        self.0
    }

    /// Returns true if nothing is on hand.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if at least `quantity` units are on hand.
    #[must_use]
    pub const fn covers(&self, quantity: Quantity) -> bool {
        self.0 >= quantity.value()
    }

    /// Remove `quantity` units, or report the shortfall without changing anything.
    ///
    /// # Errors
    ///
    /// Returns the shortfall if fewer than `quantity` units are on hand.
    pub const fn withdraw(&self, quantity: Quantity) -> Result<Self, StockShortfall> {
        match self.0.checked_sub(quantity.value()) {
            Some(rest) => Ok(Self(rest)),
            None => Err(StockShortfall {
                requested: quantity.value(),
                available: self.0,
            }),
        }
    }
}

impl fmt::Display for StockLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(dec!(1), Some(1) ; "one")]
    #[test_case(dec!(42), Some(42) ; "whole")]
    #[test_case(dec!(3.0), Some(3) ; "trailing zero scale")]
    #[test_case(dec!(0), None ; "zero")]
    #[test_case(dec!(-2), None ; "negative")]
    #[test_case(dec!(1.5), None ; "fractional")]
    #[test_case(dec!(99999999999), None ; "too large")]
    fn quantity_from_decimal(input: Decimal, expected: Option<u32>) {
        let parsed = Quantity::from_decimal(input).ok().map(|q| q.value());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn quantity_rejects_zero_on_deserialize() {
        let result: Result<Quantity, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }

    #[test_case(dec!(0), Some(0) ; "zero")]
    #[test_case(dec!(12), Some(12) ; "whole")]
    #[test_case(dec!(-1), None ; "negative")]
    #[test_case(dec!(2.25), None ; "fractional")]
    fn stock_from_decimal(input: Decimal, expected: Option<u32>) {
        let parsed = StockLevel::from_decimal(input).ok().map(|s| s.units());
        assert_eq!(parsed, expected);
    }

    #[test]
    fn withdraw_within_stock() {
        let stock = StockLevel::new(3);
        let qty = Quantity::try_new(2).unwrap();
        assert!(stock.covers(qty));
        assert_eq!(stock.withdraw(qty).unwrap(), StockLevel::new(1));
    }

    #[test]
    fn withdraw_exact_stock_empties() {
        let stock = StockLevel::new(2);
        let after = stock.withdraw(Quantity::try_new(2).unwrap()).unwrap();
        assert!(after.is_empty());
    }

    #[test]
    fn withdraw_beyond_stock_reports_shortfall() {
        let stock = StockLevel::new(1);
        let err = stock.withdraw(Quantity::try_new(2).unwrap()).unwrap_err();
        assert_eq!(
            err,
            StockShortfall {
                requested: 2,
                available: 1
            }
        );
    }
}
