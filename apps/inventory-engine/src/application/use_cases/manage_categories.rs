//! Manage Categories Use Case

use std::sync::Arc;

use crate::application::dto::{CategoryDto, SaveCategoryDto};
use crate::domain::accounts::Caller;
use crate::domain::catalog::{CatalogError, CatalogRepository, Category};
use crate::domain::shared::CategoryId;
use crate::error::ServiceError;

/// Use case for category CRUD.
///
/// Any authenticated caller may read; writes require the admin role.
pub struct ManageCategoriesUseCase<C>
where
    C: CatalogRepository,
{
    catalog: Arc<C>,
}

impl<C> ManageCategoriesUseCase<C>
where
    C: CatalogRepository,
{
    /// Create a new ManageCategoriesUseCase.
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    /// All categories, ordered by name.
    pub async fn list(&self, _caller: &Caller) -> Result<Vec<CategoryDto>, ServiceError> {
        let categories = self.catalog.list_categories().await?;
        Ok(categories.iter().map(CategoryDto::from_category).collect())
    }

    /// One category.
    pub async fn get(&self, _caller: &Caller, id: &str) -> Result<CategoryDto, ServiceError> {
        self.catalog
            .find_category(&CategoryId::new(id))
            .await?
            .map(|c| CategoryDto::from_category(&c))
            .ok_or_else(|| ServiceError::not_found("Category", id))
    }

    /// Create a category with a unique name.
    pub async fn create(
        &self,
        caller: &Caller,
        dto: SaveCategoryDto,
    ) -> Result<CategoryDto, ServiceError> {
        caller.require_admin("create category")?;
        let category = Category::new(dto.into_details())?;
        let category = self.catalog.insert_category(category).await?;

        tracing::info!(category_id = %category.id(), name = category.name(), "Category created");
        crate::observability::record_catalog_mutation("category", "create");
        Ok(CategoryDto::from_category(&category))
    }

    /// Replace a category's name and description.
    pub async fn update(
        &self,
        caller: &Caller,
        id: &str,
        dto: SaveCategoryDto,
    ) -> Result<CategoryDto, ServiceError> {
        caller.require_admin("update category")?;
        let category = self
            .catalog
            .update_category(&CategoryId::new(id), dto.into_details())
            .await?;

        tracing::info!(category_id = %category.id(), "Category updated");
        crate::observability::record_catalog_mutation("category", "update");
        Ok(CategoryDto::from_category(&category))
    }

    /// Delete a category no product references.
    pub async fn delete(&self, caller: &Caller, id: &str) -> Result<CategoryDto, ServiceError> {
        caller.require_admin("delete category")?;
        match self.catalog.delete_category(&CategoryId::new(id)).await {
            Ok(category) => {
                tracing::info!(category_id = %category.id(), "Category deleted");
                crate::observability::record_catalog_mutation("category", "delete");
                Ok(CategoryDto::from_category(&category))
            }
            Err(e @ CatalogError::ReferentialConflict { references, .. }) => {
                tracing::warn!(category_id = id, references, "Category delete blocked");
                crate::observability::record_delete_blocked("category");
                Err(e.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::accounts::Role;
    use crate::error::ErrorCode;
    use crate::infrastructure::persistence::InMemoryInventoryStore;

    fn admin() -> Caller {
        Caller::new("admin-1", Role::Admin)
    }

    fn save(name: &str) -> SaveCategoryDto {
        SaveCategoryDto {
            name: name.to_string(),
            description: "desc".to_string(),
        }
    }

    fn use_case() -> ManageCategoriesUseCase<InMemoryInventoryStore> {
        ManageCategoriesUseCase::new(Arc::new(InMemoryInventoryStore::new()))
    }

    #[tokio::test]
    async fn create_list_and_get() {
        let use_case = use_case();
        let created = use_case.create(&admin(), save(" Tools ")).await.unwrap();
        assert_eq!(created.name, "Tools");

        let listed = use_case.list(&admin()).await.unwrap();
        assert_eq!(listed.len(), 1);
        let fetched = use_case.get(&admin(), &created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn blank_name_is_validation_error() {
        let err = use_case().create(&admin(), save("   ")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected() {
        let use_case = use_case();
        use_case.create(&admin(), save("Tools")).await.unwrap();
        let err = use_case.create(&admin(), save("Tools")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateName);
    }

    #[tokio::test]
    async fn customer_cannot_write() {
        let customer = Caller::new("u-1", Role::Customer);
        let err = use_case().create(&customer, save("Tools")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }

    #[tokio::test]
    async fn delete_missing_is_not_found() {
        let err = use_case().delete(&admin(), "nope").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
