//! Place Order Use Case
//!
//! Validates an order request and hands it to the store for an atomic
//! stock withdrawal. The pre-check here gives early, cheap rejections; the
//! store re-checks under its lock, which is what actually prevents overselling.

use std::sync::Arc;

use crate::application::dto::{OrderDto, PlaceOrderDto};
use crate::domain::accounts::Caller;
use crate::domain::catalog::CatalogRepository;
use crate::domain::ordering::{FulfillmentRequest, OrderError, OrderRepository, PlaceOrderCommand};
use crate::domain::shared::Timestamp;
use crate::error::ServiceError;

/// Use case for placing an order.
pub struct PlaceOrderUseCase<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    catalog: Arc<C>,
    orders: Arc<O>,
}

impl<C, O> PlaceOrderUseCase<C, O>
where
    C: CatalogRepository,
    O: OrderRepository,
{
    /// Create a new PlaceOrderUseCase.
    pub fn new(catalog: Arc<C>, orders: Arc<O>) -> Self {
        Self { catalog, orders }
    }

    /// Execute the use case.
    ///
    /// Checks run in order: product exists, quantity is a whole number of at
    /// least 1, stock covers the quantity. The order is then fulfilled
    /// atomically with the product's current price.
    pub async fn execute(
        &self,
        caller: &Caller,
        request: PlaceOrderDto,
    ) -> Result<OrderDto, ServiceError> {
        let command = request.to_command(&caller.user_id);

        let result = self.place(command).await;
        match &result {
            Ok(order) => {
                tracing::info!(
                    order_id = %order.id,
                    product_id = %order.product_id,
                    quantity = order.quantity,
                    total = %order.total_price,
                    "Order placed"
                );
                crate::observability::record_order_placed(order.quantity);
            }
            Err(e) if e.is_internal() => {
                tracing::error!(product_id = %request.product_id, error = %e, "Order failed");
                crate::observability::record_order_rejection(e.code().metric_label());
            }
            Err(e) => {
                tracing::warn!(
                    product_id = %request.product_id,
                    quantity = %request.quantity,
                    error = %e,
                    "Order rejected"
                );
                crate::observability::record_order_rejection(e.code().metric_label());
            }
        }
        result
    }

    async fn place(&self, command: PlaceOrderCommand) -> Result<OrderDto, ServiceError> {
        let product = self
            .catalog
            .find_product(&command.product_id)
            .await?
            .ok_or_else(|| OrderError::ProductNotFound {
                product_id: command.product_id.to_string(),
            })?;

        let quantity = command.validate()?;

        product
            .stock()
            .withdraw(quantity)
            .map_err(|shortfall| OrderError::insufficient(product.id().as_str(), shortfall))?;

        let order = self
            .orders
            .fulfill(FulfillmentRequest {
                product_id: command.product_id,
                user_id: command.user_id,
                quantity,
                placed_at: Timestamp::now(),
            })
            .await?;

        // The order is committed; a failed name lookup only drops the label.
        let category_name = self
            .catalog
            .find_category(product.category_id())
            .await
            .inspect_err(|e| {
                tracing::warn!(order_id = %order.id(), error = %e, "Category lookup failed");
            })
            .ok()
            .flatten()
            .map(|c| c.name().to_string());

        Ok(OrderDto::from_order(&order).with_names(Some(product.name().to_string()), category_name))
    }
}
