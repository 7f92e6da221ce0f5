//! Dependency Injection Container
//!
//! Manages creation and wiring of all application components.

use std::path::Path;
use std::sync::Arc;

use chrono::FixedOffset;
use thiserror::Error;

use crate::application::ports::PasswordHasherPort;
use crate::application::use_cases::{
    ComputeSummaryUseCase, ListOrdersUseCase, ManageCategoriesUseCase, ManageProductsUseCase,
    ManageSuppliersUseCase, ManageUsersUseCase, PlaceOrderUseCase,
};
use crate::config::Config;
use crate::infrastructure::http::{AppState, InventoryStore};
use crate::infrastructure::persistence::{InMemoryInventoryStore, SeedData, SeedError, SeedSummary};
use crate::infrastructure::security::Argon2PasswordHasher;

/// Errors raised while assembling the application.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// The configured reporting offset is out of range.
    #[error("invalid reporting offset: {minutes} minutes")]
    InvalidZone {
        /// Configured offset.
        minutes: i32,
    },

    /// Seed data could not be loaded.
    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Dependency injection container.
///
/// Holds the store and hasher every use case is wired against.
pub struct Container<S, H>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    store: Arc<S>,
    hasher: Arc<H>,
    zone: FixedOffset,
}

impl<S, H> Container<S, H>
where
    S: InventoryStore,
    H: PasswordHasherPort + 'static,
{
    /// Create a new container.
    pub const fn new(store: Arc<S>, hasher: Arc<H>, zone: FixedOffset) -> Self {
        Self {
            store,
            hasher,
            zone,
        }
    }

    /// Get the store.
    pub fn store(&self) -> Arc<S> {
        Arc::clone(&self.store)
    }

    /// Get the password hasher.
    pub fn hasher(&self) -> Arc<H> {
        Arc::clone(&self.hasher)
    }

    /// Reporting zone for dashboard day windows.
    pub const fn zone(&self) -> FixedOffset {
        self.zone
    }

    /// Create a `ManageCategoriesUseCase`.
    pub fn manage_categories_use_case(&self) -> ManageCategoriesUseCase<S> {
        ManageCategoriesUseCase::new(Arc::clone(&self.store))
    }

    /// Create a `ManageSuppliersUseCase`.
    pub fn manage_suppliers_use_case(&self) -> ManageSuppliersUseCase<S> {
        ManageSuppliersUseCase::new(Arc::clone(&self.store))
    }

    /// Create a `ManageProductsUseCase`.
    pub fn manage_products_use_case(&self) -> ManageProductsUseCase<S> {
        ManageProductsUseCase::new(Arc::clone(&self.store))
    }

    /// Create a `PlaceOrderUseCase`.
    pub fn place_order_use_case(&self) -> PlaceOrderUseCase<S, S> {
        PlaceOrderUseCase::new(Arc::clone(&self.store), Arc::clone(&self.store))
    }

    /// Create a `ListOrdersUseCase`.
    pub fn list_orders_use_case(&self) -> ListOrdersUseCase<S, S> {
        ListOrdersUseCase::new(Arc::clone(&self.store), Arc::clone(&self.store))
    }

    /// Create a `ManageUsersUseCase`.
    pub fn manage_users_use_case(&self) -> ManageUsersUseCase<S, H> {
        ManageUsersUseCase::new(Arc::clone(&self.store), Arc::clone(&self.hasher))
    }

    /// Create a `ComputeSummaryUseCase`.
    pub fn compute_summary_use_case(&self) -> ComputeSummaryUseCase<S> {
        ComputeSummaryUseCase::new(Arc::clone(&self.store), self.zone)
    }

    /// Build the shared HTTP state.
    pub fn app_state(&self, version: impl Into<String>) -> AppState<S, H> {
        AppState::new(
            Arc::clone(&self.store),
            Arc::clone(&self.hasher),
            self.zone,
            version,
        )
    }

    /// Load a seed file into the store.
    pub async fn seed_from_file(&self, path: &Path) -> Result<SeedSummary, SeedError> {
        let seed = SeedData::from_file(path)?;
        seed.apply(self.store.as_ref(), self.hasher.as_ref()).await
    }
}

impl Container<InMemoryInventoryStore, Argon2PasswordHasher> {
    /// Build the in-memory application from configuration, applying the
    /// seed file when one is configured.
    pub async fn from_config(config: &Config) -> Result<Self, ContainerError> {
        let minutes = config.reporting.utc_offset_minutes;
        let zone = config
            .reporting
            .zone()
            .ok_or(ContainerError::InvalidZone { minutes })?;

        let container = Self::new(
            Arc::new(InMemoryInventoryStore::new()),
            Arc::new(Argon2PasswordHasher::new()),
            zone,
        );

        if let Some(path) = config.persistence.seed_path.as_deref() {
            let summary = container.seed_from_file(Path::new(path)).await?;
            tracing::info!(
                path,
                categories = summary.categories,
                suppliers = summary.suppliers,
                products = summary.products,
                users = summary.users,
                "Seed data loaded"
            );
        }

        Ok(container)
    }
}
