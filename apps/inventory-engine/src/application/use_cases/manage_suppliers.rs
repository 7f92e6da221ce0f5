//! Manage Suppliers Use Case

use std::sync::Arc;

use crate::application::dto::{SaveSupplierDto, SupplierDto};
use crate::domain::accounts::Caller;
use crate::domain::catalog::{CatalogError, CatalogRepository, Supplier};
use crate::domain::shared::SupplierId;
use crate::error::ServiceError;

/// Use case for supplier CRUD. Admin only.
pub struct ManageSuppliersUseCase<C>
where
    C: CatalogRepository,
{
    catalog: Arc<C>,
}

impl<C> ManageSuppliersUseCase<C>
where
    C: CatalogRepository,
{
    /// Create a new ManageSuppliersUseCase.
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// All suppliers, ordered by name.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<SupplierDto>, ServiceError> {
        caller.require_admin("list suppliers")?;
        let suppliers = self.catalog.list_suppliers().await?;
        Ok(suppliers.iter().map(SupplierDto::from_supplier).collect())
    }

    /// One supplier.
    pub async fn get(&self, caller: &Caller, id: &str) -> Result<SupplierDto, ServiceError> {
        caller.require_admin("view supplier")?;
        self.catalog
            .find_supplier(&SupplierId::new(id))
            .await?
            .map(|s| SupplierDto::from_supplier(&s))
            .ok_or_else(|| ServiceError::not_found("Supplier", id))
    }

    /// Create a supplier.
    pub async fn create(
        &self,
        caller: &Caller,
        dto: SaveSupplierDto,
    ) -> Result<SupplierDto, ServiceError> {
        caller.require_admin("create supplier")?;
        let supplier = Supplier::new(dto.into_details())?;
        let supplier = self.catalog.insert_supplier(supplier).await?;

        tracing::info!(supplier_id = %supplier.id(), name = supplier.name(), "Supplier created");
        crate::observability::record_catalog_mutation("supplier", "create");
        Ok(SupplierDto::from_supplier(&supplier))
    }

    /// Replace a supplier's contact details.
    pub async fn update(
        &self,
        caller: &Caller,
        id: &str,
        dto: SaveSupplierDto,
    ) -> Result<SupplierDto, ServiceError> {
        caller.require_admin("update supplier")?;
        let supplier = self
            .catalog
            .update_supplier(&SupplierId::new(id), dto.into_details())
            .await?;

        tracing::info!(supplier_id = %supplier.id(), "Supplier updated");
        crate::observability::record_catalog_mutation("supplier", "update");
        Ok(SupplierDto::from_supplier(&supplier))
    }

    /// Delete a supplier no product references.
    pub async fn delete(&self, caller: &Caller, id: &str) -> Result<SupplierDto, ServiceError> {
        caller.require_admin("delete supplier")?;
        match self.catalog.delete_supplier(&SupplierId::new(id)).await {
            Ok(supplier) => {
                tracing::info!(supplier_id = %supplier.id(), "Supplier deleted");
                crate::observability::record_catalog_mutation("supplier", "delete");
                Ok(SupplierDto::from_supplier(&supplier))
            }
            Err(e @ CatalogError::ReferentialConflict { references, .. }) => {
                tracing::warn!(supplier_id = id, references, "Supplier delete blocked");
                crate::observability::record_delete_blocked("supplier");
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}
