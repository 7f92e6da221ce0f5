//! Dashboard aggregation.
//!
//! Pure computation over one [`InventorySnapshot`]. Nothing here touches the
//! store, so every metric in a summary describes the same instant.

use std::collections::{BTreeMap, HashMap};

use chrono::FixedOffset;

use crate::domain::catalog::{Category, Product};
use crate::domain::ordering::Order;
use crate::domain::reporting::ReportingError;
use crate::domain::shared::{CategoryId, Money, ProductId, StockLevel, Timestamp};

/// Products with fewer units than this (but more than zero) are low on stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// Point-in-time copy of the catalog and order book.
#[derive(Debug, Clone, Default)]
pub struct InventorySnapshot {
    /// All categories.
    pub categories: Vec<Category>,
    /// All products.
    pub products: Vec<Product>,
    /// All orders.
    pub orders: Vec<Order>,
}

/// A product flagged for its stock level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAlert {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Units on hand.
    pub stock: StockLevel,
    /// Name of the product's category.
    pub category: Option<String>,
}

/// The product with the most units sold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopSeller {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Name of the product's category.
    pub category: Option<String>,
    /// Units sold across all orders.
    pub total_quantity: u64,
}

/// Operational metrics derived from a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardSummary {
    /// Number of products.
    pub total_products: usize,
    /// Units on hand across all products.
    pub total_stock: u64,
    /// Orders placed during the reference day containing `as_of`.
    pub orders_today: usize,
    /// Sum of order totals, all time.
    pub revenue: Money,
    /// Products with no stock.
    pub out_of_stock: Vec<StockAlert>,
    /// Products with `0 < stock < LOW_STOCK_THRESHOLD`.
    pub low_stock: Vec<StockAlert>,
    /// Best seller by units; `None` without orders.
    pub highest_sale_product: Option<TopSeller>,
}

impl DashboardSummary {
    /// Compute the summary.
    ///
    /// `zone` fixes the calendar day used for `orders_today`.
    ///
    /// # Errors
    ///
    /// Returns `RevenueOverflow` if the order totals cannot be summed.
    pub fn compute(
        snapshot: &InventorySnapshot,
        as_of: Timestamp,
        zone: FixedOffset,
    ) -> Result<Self, ReportingError> {
        let category_names: HashMap<&CategoryId, &str> = snapshot
            .categories
            .iter()
            .map(|c| (c.id(), c.name()))
            .collect();

        let alert = |product: &Product| StockAlert {
            product_id: product.id().clone(),
            name: product.name().to_string(),
            stock: product.stock(),
            category: category_names
                .get(product.category_id())
                .map(|name| (*name).to_string()),
        };

        let mut products: Vec<&Product> = snapshot.products.iter().collect();
        products.sort_by(|a, b| a.name().cmp(b.name()).then_with(|| a.id().cmp(b.id())));

        let out_of_stock = products
            .iter()
            .filter(|p| p.stock().is_empty())
            .map(|p| alert(p))
            .collect();
        let low_stock = products
            .iter()
            .filter(|p| !p.stock().is_empty() && p.stock().units() < LOW_STOCK_THRESHOLD)
            .map(|p| alert(p))
            .collect();

        let orders_today = as_of.day_window(zone).map_or(0, |(start, end)| {
            snapshot
                .orders
                .iter()
                .filter(|o| o.order_date() >= start && o.order_date() < end)
                .count()
        });

        let revenue = snapshot
            .orders
            .iter()
            .map(Order::total_price)
            .try_fold(Money::ZERO, Money::checked_add)
            .ok_or(ReportingError::RevenueOverflow {
                orders: snapshot.orders.len(),
            })?;

        Ok(Self {
            total_products: snapshot.products.len(),
            total_stock: snapshot
                .products
                .iter()
                .map(|p| u64::from(p.stock().units()))
                .sum(),
            orders_today,
            revenue,
            out_of_stock,
            low_stock,
            highest_sale_product: Self::top_seller(snapshot, &category_names),
        })
    }

    /// Greatest total quantity wins; ties go to the lowest product ID.
    fn top_seller(
        snapshot: &InventorySnapshot,
        category_names: &HashMap<&CategoryId, &str>,
    ) -> Option<TopSeller> {
        let mut units_by_product: BTreeMap<&ProductId, u64> = BTreeMap::new();
        for order in &snapshot.orders {
            *units_by_product.entry(order.product_id()).or_default() +=
                u64::from(order.quantity().value());
        }

        let mut best: Option<(&ProductId, u64)> = None;
        for (product_id, units) in units_by_product {
            if best.is_none_or(|(_, top)| units > top) {
                best = Some((product_id, units));
            }
        }

        let (product_id, total_quantity) = best?;
        let product = snapshot.products.iter().find(|p| p.id() == product_id);
        Some(TopSeller {
            product_id: product_id.clone(),
            name: product.map_or_else(|| product_id.to_string(), |p| p.name().to_string()),
            category: product
                .and_then(|p| category_names.get(p.category_id()))
                .map(|name| (*name).to_string()),
            total_quantity,
        })
    }
}
