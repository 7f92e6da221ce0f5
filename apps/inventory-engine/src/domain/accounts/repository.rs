//! User Repository Trait

use async_trait::async_trait;

use super::errors::AccountError;
use super::user::User;
use crate::domain::shared::UserId;

/// Repository trait for user accounts.
///
/// Email uniqueness is enforced by the implementation inside the same
/// atomic unit as the write.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmail` if the email is taken.
    async fn insert(&self, user: User) -> Result<User, AccountError>;

    /// Persist changes to an existing account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `DuplicateEmail`.
    async fn update(&self, user: User) -> Result<User, AccountError>;

    /// Find an account by ID.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AccountError>;

    /// All accounts, ordered by name.
    async fn list(&self) -> Result<Vec<User>, AccountError>;

    /// Delete an account.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the account does not exist.
    async fn delete(&self, id: &UserId) -> Result<User, AccountError>;
}
