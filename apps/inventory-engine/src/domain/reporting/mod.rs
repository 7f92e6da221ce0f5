//! Reporting Bounded Context
//!
//! Read-only aggregation of catalog and order state.

pub mod dashboard;
pub mod errors;

pub use dashboard::{
    DashboardSummary, InventorySnapshot, LOW_STOCK_THRESHOLD, StockAlert, TopSeller,
};
pub use errors::ReportingError;
