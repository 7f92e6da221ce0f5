//! Manage Products Use Case

use std::collections::HashMap;
use std::sync::Arc;

use crate::application::dto::{ProductDto, SaveProductDto};
use crate::domain::accounts::Caller;
use crate::domain::catalog::{CatalogError, CatalogRepository, Product};
use crate::domain::shared::{CategoryId, ProductId, SupplierId};
use crate::error::ServiceError;

/// Use case for product CRUD and stock corrections.
///
/// Any authenticated caller may browse; writes require the admin role.
pub struct ManageProductsUseCase<C>
where
    C: CatalogRepository,
{
    catalog: Arc<C>,
}

impl<C> ManageProductsUseCase<C>
where
    C: CatalogRepository,
{
    /// Create a new ManageProductsUseCase.
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// All products with category and supplier names, ordered by name.
    pub async fn list(&self, _caller: &Caller) -> Result<Vec<ProductDto>, ServiceError> {
        let products = self.catalog.list_products().await?;
        let (categories, suppliers) = self.name_tables().await?;
        Ok(products
            .iter()
            .map(|p| ProductDto::from_product(p).with_names(&categories, &suppliers))
            .collect())
    }

    /// One product with category and supplier names.
    pub async fn get(&self, _caller: &Caller, id: &str) -> Result<ProductDto, ServiceError> {
        let product = self
            .catalog
            .find_product(&ProductId::new(id))
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id))?;
        self.enrich(&product).await
    }

    /// Create a product whose category and supplier exist.
    pub async fn create(
        &self,
        caller: &Caller,
        dto: SaveProductDto,
    ) -> Result<ProductDto, ServiceError> {
        caller.require_admin("create product")?;
        let product = Product::new(dto.into_details()?)?;
        let product = self.catalog.insert_product(product).await?;

        tracing::info!(
            product_id = %product.id(),
            stock = product.stock().units(),
            "Product created"
        );
        crate::observability::record_catalog_mutation("product", "create");
        self.enrich(&product).await
    }

    /// Replace a product's fields, including an absolute stock correction.
    pub async fn update(
        &self,
        caller: &Caller,
        id: &str,
        dto: SaveProductDto,
    ) -> Result<ProductDto, ServiceError> {
        caller.require_admin("update product")?;
        let product = self
            .catalog
            .update_product(&ProductId::new(id), dto.into_details()?)
            .await?;

        tracing::info!(
            product_id = %product.id(),
            stock = product.stock().units(),
            "Product updated"
        );
        crate::observability::record_catalog_mutation("product", "update");
        self.enrich(&product).await
    }

    /// Delete a product no order references.
    pub async fn delete(&self, caller: &Caller, id: &str) -> Result<ProductDto, ServiceError> {
        caller.require_admin("delete product")?;
        match self.catalog.delete_product(&ProductId::new(id)).await {
            Ok(product) => {
                tracing::info!(product_id = %product.id(), "Product deleted");
                crate::observability::record_catalog_mutation("product", "delete");
                Ok(ProductDto::from_product(&product))
            }
            Err(e @ CatalogError::ReferentialConflict { references, .. }) => {
                tracing::warn!(product_id = id, references, "Product delete blocked");
                crate::observability::record_delete_blocked("product");
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn enrich(&self, product: &Product) -> Result<ProductDto, ServiceError> {
        let category = self.catalog.find_category(product.category_id()).await?;
        let supplier = self.catalog.find_supplier(product.supplier_id()).await?;
        let mut dto = ProductDto::from_product(product);
        dto.category_name = category.map(|c| c.name().to_string());
        dto.supplier_name = supplier.map(|s| s.name().to_string());
        Ok(dto)
    }

    async fn name_tables(
        &self,
    ) -> Result<(HashMap<CategoryId, String>, HashMap<SupplierId, String>), ServiceError> {
        let categories = self
            .catalog
            .list_categories()
            .await?
            .into_iter()
            .map(|c| (c.id().clone(), c.name().to_string()))
            .collect();
        let suppliers = self
            .catalog
            .list_suppliers()
            .await?
            .into_iter()
            .map(|s| (s.id().clone(), s.name().to_string()))
            .collect();
        Ok((categories, suppliers))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::accounts::Role;
    use crate::domain::catalog::{Category, CategoryDetails, Supplier, SupplierDetails};
    use crate::error::ErrorCode;
    use crate::infrastructure::persistence::InMemoryInventoryStore;

    fn admin() -> Caller {
        Caller::new("admin-1", Role::Admin)
    }

    async fn setup() -> (ManageProductsUseCase<InMemoryInventoryStore>, String, String) {
        let store = Arc::new(InMemoryInventoryStore::new());
        let category = store
            .insert_category(
                Category::new(CategoryDetails {
                    name: "Tools".to_string(),
                    description: String::new(),
                })
                .unwrap(),
            )
            .await
            .unwrap();
        let supplier = store
            .insert_supplier(
                Supplier::new(SupplierDetails {
                    name: "Acme".to_string(),
                    ..SupplierDetails::default()
                })
                .unwrap(),
            )
            .await
            .unwrap();
        (
            ManageProductsUseCase::new(store),
            category.id().to_string(),
            supplier.id().to_string(),
        )
    }

    fn save(category_id: &str, supplier_id: &str) -> SaveProductDto {
        SaveProductDto {
            name: "Hammer".to_string(),
            description: String::new(),
            price: dec!(9.99),
            stock: dec!(10),
            category_id: category_id.to_string(),
            supplier_id: supplier_id.to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn create_enriches_names() {
        let (use_case, category_id, supplier_id) = setup().await;
        let created = use_case
            .create(&admin(), save(&category_id, &supplier_id))
            .await
            .unwrap();
        assert_eq!(created.category_name.as_deref(), Some("Tools"));
        assert_eq!(created.supplier_name.as_deref(), Some("Acme"));

        let listed = use_case
            .list(&Caller::new("u-1", Role::Customer))
            .await
            .unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].category_name.as_deref(), Some("Tools"));
    }

    #[tokio::test]
    async fn dangling_category_is_invalid_reference() {
        let (use_case, _, supplier_id) = setup().await;
        let err = use_case
            .create(&admin(), save("ghost", &supplier_id))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidReference);
    }

    #[tokio::test]
    async fn non_positive_price_rejected() {
        let (use_case, category_id, supplier_id) = setup().await;
        let mut dto = save(&category_id, &supplier_id);
        dto.price = dec!(0);
        let err = use_case.create(&admin(), dto).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn negative_stock_rejected() {
        let (use_case, category_id, supplier_id) = setup().await;
        let mut dto = save(&category_id, &supplier_id);
        dto.stock = dec!(-1);
        let err = use_case.create(&admin(), dto).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn stock_correction_is_absolute() {
        let (use_case, category_id, supplier_id) = setup().await;
        let created = use_case
            .create(&admin(), save(&category_id, &supplier_id))
            .await
            .unwrap();
        let mut dto = save(&category_id, &supplier_id);
        dto.stock = dec!(3);
        let updated = use_case.update(&admin(), &created.id, dto).await.unwrap();
        assert_eq!(updated.stock, 3);
    }
}
