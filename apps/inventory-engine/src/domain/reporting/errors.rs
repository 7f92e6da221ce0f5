//! Reporting errors.

use std::fmt;

/// Errors raised while aggregating a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportingError {
    /// Summed order totals do not fit in a monetary amount.
    RevenueOverflow {
        /// Orders in the snapshot.
        orders: usize,
    },
}

impl fmt::Display for ReportingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RevenueOverflow { orders } => {
                write!(f, "Revenue across {orders} orders is out of range")
            }
        }
    }
}

impl std::error::Error for ReportingError {}
