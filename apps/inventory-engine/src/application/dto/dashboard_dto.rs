//! Dashboard DTOs

use serde::{Deserialize, Serialize};

use crate::domain::reporting::{DashboardSummary, StockAlert, TopSeller};
use crate::domain::shared::{Money, Timestamp};

/// A product listed under a stock alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAlertDto {
    /// Product ID.
    pub id: String,
    /// Product name.
    pub name: String,
    /// Units on hand.
    pub stock: u32,
    /// Category name.
    pub category: Option<String>,
}

impl From<&StockAlert> for StockAlertDto {
    fn from(alert: &StockAlert) -> Self {
        Self {
            id: alert.product_id.to_string(),
            name: alert.name.clone(),
            stock: alert.stock.units(),
            category: alert.category.clone(),
        }
    }
}

/// Best-selling product.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSellerDto {
    /// Product name.
    pub name: String,
    /// Category name.
    pub category: Option<String>,
    /// Units sold.
    pub total_quantity: u64,
}

impl From<&TopSeller> for TopSellerDto {
    fn from(top: &TopSeller) -> Self {
        Self {
            name: top.name.clone(),
            category: top.category.clone(),
            total_quantity: top.total_quantity,
        }
    }
}

/// DTO representing the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDto {
    /// Reference instant for `ordersToday`.
    pub as_of: Timestamp,
    /// Number of products.
    pub total_products: usize,
    /// Units on hand across all products.
    pub total_stock: u64,
    /// Orders placed on the reference day.
    pub orders_today: usize,
    /// All-time revenue.
    pub revenue: Money,
    /// Products with no stock.
    pub out_of_stock: Vec<StockAlertDto>,
    /// Products running low.
    pub low_stock: Vec<StockAlertDto>,
    /// Best seller, if any order exists.
    pub highest_sale_product: Option<TopSellerDto>,
}

impl DashboardDto {
    /// Create from a computed summary.
    #[must_use]
    pub fn from_summary(summary: &DashboardSummary, as_of: Timestamp) -> Self {
        Self {
            as_of,
            total_products: summary.total_products,
            total_stock: summary.total_stock,
            orders_today: summary.orders_today,
            revenue: summary.revenue,
            out_of_stock: summary.out_of_stock.iter().map(StockAlertDto::from).collect(),
            low_stock: summary.low_stock.iter().map(StockAlertDto::from).collect(),
            highest_sale_product: summary.highest_sale_product.as_ref().map(TopSellerDto::from),
        }
    }
}
