//! Manage Users Use Case

use std::sync::Arc;

use crate::application::dto::{CreateUserDto, UpdateProfileDto, UserDto};
use crate::application::ports::{PasswordHashError, PasswordHasherPort};
use crate::domain::accounts::{AccountError, Caller, PasswordHash, User, UserRepository};
use crate::domain::shared::UserId;
use crate::error::ServiceError;

/// Use case for the account directory and self-service profiles.
pub struct ManageUsersUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHasherPort,
{
    users: Arc<U>,
    hasher: Arc<H>,
}

impl<U, H> ManageUsersUseCase<U, H>
where
    U: UserRepository,
    H: PasswordHasherPort,
{
    /// Create a new ManageUsersUseCase.
    pub fn new(users: Arc<U>, hasher: Arc<H>) -> Self {
        Self { users, hasher }
    }

    /// All accounts. Admin only.
    pub async fn list(&self, caller: &Caller) -> Result<Vec<UserDto>, ServiceError> {
        caller.require_admin("list users")?;
        let users = self.users.list().await?;
        Ok(users.iter().map(UserDto::from_user).collect())
    }

    /// Create an account. Admin only.
    pub async fn create(&self, caller: &Caller, dto: CreateUserDto) -> Result<UserDto, ServiceError> {
        caller.require_admin("create user")?;
        let profile = dto.profile().normalized()?;
        let hash = self.hash(&dto.password)?;
        let user = self
            .users
            .insert(User::register(profile, hash, dto.role)?)
            .await?;

        tracing::info!(user_id = %user.id(), role = %user.role(), "User created");
        Ok(UserDto::from_user(&user))
    }

    /// Delete an account. Admin only; admins cannot delete themselves.
    pub async fn delete(&self, caller: &Caller, id: &str) -> Result<UserDto, ServiceError> {
        caller.require_admin("delete user")?;
        let id = UserId::new(id);
        if id == caller.user_id {
            return Err(AccountError::SelfDeletion.into());
        }
        let user = self.users.delete(&id).await?;

        tracing::info!(user_id = %user.id(), "User deleted");
        Ok(UserDto::from_user(&user))
    }

    /// The caller's own account.
    pub async fn profile(&self, caller: &Caller) -> Result<UserDto, ServiceError> {
        let user = self.load(&caller.user_id).await?;
        Ok(UserDto::from_user(&user))
    }

    /// Edit the caller's own profile. A blank password keeps the current one.
    pub async fn update_profile(
        &self,
        caller: &Caller,
        dto: UpdateProfileDto,
    ) -> Result<UserDto, ServiceError> {
        let mut user = self.load(&caller.user_id).await?;
        let hash = dto.new_password().map(|p| self.hash(p)).transpose()?;
        let password_changed = hash.is_some();
        user.update_profile(dto.profile(), hash)?;
        let user = self.users.update(user).await?;

        tracing::info!(user_id = %user.id(), password_changed, "Profile updated");
        Ok(UserDto::from_user(&user))
    }

    async fn load(&self, id: &UserId) -> Result<User, ServiceError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.as_str()))
    }

    fn hash(&self, plain: &str) -> Result<PasswordHash, ServiceError> {
        self.hasher.hash(plain).map_err(|e| match e {
            PasswordHashError::EmptyPassword => {
                ServiceError::validation(e.to_string()).with_context("field", "password")
            }
            PasswordHashError::Hashing { .. } | PasswordHashError::MalformedHash { .. } => {
                ServiceError::internal(e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockPasswordHasherPort;
    use crate::domain::accounts::{Role, UserProfile};
    use crate::error::ErrorCode;
    use crate::infrastructure::persistence::InMemoryInventoryStore;

    fn admin() -> Caller {
        Caller::new("admin-1", Role::Admin)
    }

    fn hasher() -> MockPasswordHasherPort {
        let mut hasher = MockPasswordHasherPort::new();
        hasher.expect_hash().returning(|plain| {
            if plain.is_empty() {
                Err(PasswordHashError::EmptyPassword)
            } else {
                Ok(PasswordHash::new(format!("hashed:{plain}")))
            }
        });
        hasher
    }

    fn create_dto(email: &str) -> CreateUserDto {
        CreateUserDto {
            name: "Ada".to_string(),
            email: email.to_string(),
            password: "s3cret".to_string(),
            address: String::new(),
            role: Role::Customer,
        }
    }

    #[tokio::test]
    async fn create_hashes_password_and_rejects_duplicates() {
        let store = Arc::new(InMemoryInventoryStore::new());
        let use_case = ManageUsersUseCase::new(store.clone(), Arc::new(hasher()));

        let created = use_case.create(&admin(), create_dto("Ada@X.io")).await.unwrap();
        assert_eq!(created.email, "ada@x.io");
        let stored = store
            .find_by_id(&UserId::new(created.id.as_str()))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.password_hash().as_str(), "hashed:s3cret");

        let err = use_case
            .create(&admin(), create_dto("ada@x.io"))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::DuplicateName);
    }

    #[tokio::test]
    async fn empty_password_is_validation_error() {
        let use_case =
            ManageUsersUseCase::new(Arc::new(InMemoryInventoryStore::new()), Arc::new(hasher()));
        let mut dto = create_dto("a@b.c");
        dto.password = String::new();
        let err = use_case.create(&admin(), dto).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
    }

    #[tokio::test]
    async fn admin_cannot_delete_self() {
        let use_case =
            ManageUsersUseCase::new(Arc::new(InMemoryInventoryStore::new()), Arc::new(hasher()));
        let err = use_case.delete(&admin(), "admin-1").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationError);
        let err = use_case.delete(&admin(), "ghost").await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn blank_password_keeps_hash_without_hashing() {
        let store = Arc::new(InMemoryInventoryStore::new());
        let user = User::with_id(
            UserId::new("u-1"),
            UserProfile {
                name: "Ada".to_string(),
                email: "ada@x.io".to_string(),
                address: String::new(),
            },
            PasswordHash::new("original"),
            Role::Customer,
        )
        .unwrap();
        store.insert(user).await.unwrap();

        let mut strict = MockPasswordHasherPort::new();
        strict.expect_hash().never();
        let use_case = ManageUsersUseCase::new(store.clone(), Arc::new(strict));
        let caller = Caller::new("u-1", Role::Customer);

        let updated = use_case
            .update_profile(
                &caller,
                UpdateProfileDto {
                    name: "Ada L".to_string(),
                    email: "ada@x.io".to_string(),
                    address: "1 Road".to_string(),
                    password: Some(String::new()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Ada L");
        let stored = store.find_by_id(&UserId::new("u-1")).await.unwrap().unwrap();
        assert_eq!(stored.password_hash().as_str(), "original");
    }

    #[tokio::test]
    async fn profile_of_unknown_caller_is_not_found() {
        let use_case =
            ManageUsersUseCase::new(Arc::new(InMemoryInventoryStore::new()), Arc::new(hasher()));
        let err = use_case
            .profile(&Caller::new("nobody", Role::Customer))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn customers_cannot_list_users() {
        let use_case =
            ManageUsersUseCase::new(Arc::new(InMemoryInventoryStore::new()), Arc::new(hasher()));
        let err = use_case
            .list(&Caller::new("u-1", Role::Customer))
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::Forbidden);
    }
}
