//! List Orders Use Case

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::OrderDto;
use crate::domain::accounts::Caller;
use crate::domain::catalog::CatalogRepository;
use crate::domain::ordering::{Order, OrderRepository};
use crate::domain::shared::{CategoryId, OrderId, ProductId};
use crate::error::ServiceError;

/// Use case for reading orders.
///
/// Admins see every order; customers see only their own.
pub struct ListOrdersUseCase<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    catalog: Arc<C>,
    orders: Arc<O>,
}

impl<C, O> ListOrdersUseCase<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    /// Create a new ListOrdersUseCase.
    pub fn new(catalog: Arc<C>, orders: Arc<O>) -> Self {
        Self { catalog, orders }
    }

    /// Orders visible to the caller, newest first.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<OrderDto>, ServiceError> {
        let orders = if caller.is_admin() {
            self.orders.list_all().await?
        } else {
            self.orders.list_by_user(&caller.user_id).await?
        };
        self.enrich(&orders).await
    }

    /// One order, if the caller may see it.
    pub async fn get(&self, caller: &Caller, id: &str) -> Result<OrderDto, ServiceError> {
        let order = self
            .orders
            .find_by_id(&OrderId::new(id))
            .await?
            .filter(|o| caller.is_admin() || o.is_placed_by(&caller.user_id))
            .ok_or_else(|| ServiceError::not_found("Order", id))?;
        let mut enriched = self.enrich(std::slice::from_ref(&order)).await?;
        enriched
            .pop()
            .ok_or_else(|| ServiceError::internal("order enrichment lost the order"))
    }

    async fn enrich(&self, orders: &[Order]) -> Result<Vec<OrderDto>, ServiceError> {
        let categories: HashMap<CategoryId, String> = self
            .catalog
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (c.id().clone(), c.name().to_string()))
            .collect();
        let products: HashMap<ProductId, (String, Option<String>)> = self
            .catalog
            .list_products()
            .await?
            .into_iter()
            .map(|p| {
                let category = categories.get(p.category_id()).cloned();
                (p.id().clone(), (p.name().to_string(), category))
            })
            .collect();

        Ok(orders
            .iter()
            .map(|order| {
                let (product_name, category_name) = products
                    .get(order.product_id())
                    .cloned()
                    .map_or((None, None), |(name, category)| (Some(name), category));
                OrderDto::from_order(order).with_names(product_name, category_name)
            })
            .collect())
    }
}
