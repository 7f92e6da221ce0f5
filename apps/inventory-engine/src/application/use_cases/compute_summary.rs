//! Compute Summary Use Case

use std::sync::Arc;
use std::time::Instant;

use chrono::FixedOffset;

use crate::application::dto::DashboardDto;
use crate::application::ports::InventorySnapshotPort;
use crate::domain::accounts::Caller;
use crate::domain::reporting::DashboardSummary;
use crate::domain::shared::Timestamp;
use crate::error::ServiceError;

/// Use case for the operational dashboard. Admin only.
pub struct ComputeSummaryUseCase<S>
where
    S: InventorySnapshotPort,
{
    snapshots: Arc<S>,
    zone: FixedOffset,
}

impl<S> ComputeSummaryUseCase<S>
where
    S: InventorySnapshotPort,
{
    /// Create a new ComputeSummaryUseCase reporting days in `zone`.
    pub fn new(snapshots: Arc<S>, zone: FixedOffset) -> Self {
        Self { snapshots, zone }
    }

    /// Execute the use case. `as_of` defaults to now.
    pub async fn execute(
        &self,
        caller: &Caller,
        as_of: Option<Timestamp>,
    ) -> Result<DashboardDto, ServiceError> {
        caller.require_admin("view dashboard")?;
        let started = Instant::now();
        let as_of = as_of.unwrap_or_else(Timestamp::now);

        let snapshot = self.snapshots.snapshot().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to snapshot inventory");
            ServiceError::internal(e.to_string())
        })?;
        let summary = DashboardSummary::compute(&snapshot, as_of, self.zone).map_err(|e| {
            tracing::error!(error = %e, "Failed to aggregate dashboard");
            ServiceError::internal(e.to_string())
        })?;

        let elapsed = started.elapsed().as_secs_f64();
        tracing::debug!(
            products = snapshot.products.len(),
            orders = snapshot.orders.len(),
            orders_today = summary.orders_today,
            elapsed_ms = elapsed * 1000.0,
            "Dashboard computed"
        );
        crate::observability::record_dashboard_computation(
            snapshot.products.len(),
            snapshot.orders.len(),
            elapsed,
        );
        Ok(DashboardDto::from_summary(&summary, as_of))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::SnapshotError;
    use crate::domain::accounts::Role;
    use crate::domain::ordering::Order;
    use crate::domain::reporting::InventorySnapshot;
    use crate::domain::shared::{Money, ProductId, Quantity, UserId};
    use crate::error::ErrorCode;
    use rust_decimal::Decimal;

    struct FailingSnapshots;

    #[async_trait]
    impl InventorySnapshotPort for FailingSnapshots {
        async fn snapshot(&self) -> Result<InventorySnapshot, SnapshotError> {
            Err(SnapshotError::Storage {
                message: "unavailable".to_string(),
            })
        }
    }

    struct EmptySnapshots;

    #[async_trait]
    impl InventorySnapshotPort for EmptySnapshots {
        async fn snapshot(&self) -> Result<InventorySnapshot, SnapshotError> {
            Ok(InventorySnapshot::default())
        }
    }

    struct OverflowingSnapshots;

    #[async_trait]
    impl InventorySnapshotPort for OverflowingSnapshots {
        async fn snapshot(&self) -> Result<InventorySnapshot, SnapshotError> {
            let order = || {
                Order::place(
                    ProductId::new("p-1"),
                    UserId::new("u-1"),
                    Quantity::try_new(1).unwrap(),
                    Money::new(Decimal::MAX),
                    Timestamp::now(),
                )
                .unwrap()
            };
            Ok(InventorySnapshot {
                orders: vec![order(), order()],
                ..InventorySnapshot::default()
            })
        }
    }

    fn utc() -> FixedOffset {
        FixedOffset::east_opt(0).unwrap()
    }

    #[tokio::test]
    async fn empty_store_yields_zeroes() {
        let use_case = ComputeSummaryUseCase::new(Arc::new(EmptySnapshots), utc());
        let dashboard = use_case
            .execute(&Caller::new("root", Role::Admin), None)
            .await
            .unwrap();
        assert_eq!(dashboard.total_products, 0);
        assert_eq!(dashboard.orders_today, 0);
        assert!(dashboard.highest_sale_product.is_none());
    }

    #[tokio::test]
    async fn storage_failure_is_internal() {
        let use_case = ComputeSummaryUseCase::new(Arc::new(FailingSnapshots), utc());
        let err = use_case
            .execute(&Caller::new("root", Role::Admin), None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn revenue_overflow_is_internal_error() {
        let use_case = ComputeSummaryUseCase::new(Arc::new(OverflowingSnapshots), utc());
        let err = use_case
            .execute(&Caller::new("root", Role::Admin), None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InternalError);
    }

    #[tokio::test]
    async fn customers_are_forbidden() {
        let use_case = ComputeSummaryUseCase::new(Arc::new(EmptySnapshots), utc());
        let err = use_case
            .execute(&Caller::new("u-1", Role::Customer), None)
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }
}
