//! Request-scoped caller identity.

use super::errors::AccountError;
use super::role::Role;
use crate::domain::shared::UserId;

/// Who is invoking an operation.
///
/// Produced by the authentication layer for each request and passed
/// explicitly into every use case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// Authenticated user.
    pub user_id: UserId,
    /// Role of that user.
    pub role: Role,
}

impl Caller {
    /// Create a caller identity.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }

    /// Returns true if the caller is an admin.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Require the admin role.
    ///
    /// # Errors
    ///
    /// Returns `Forbidden` for non-admin callers.
    pub fn require_admin(&self, action: &'static str) -> Result<(), AccountError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AccountError::Forbidden { action })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_passes_gate() {
        let caller = Caller::new("u-1", Role::Admin);
        assert!(caller.require_admin("delete category").is_ok());
    }

    #[test]
    fn customer_is_forbidden() {
        let caller = Caller::new("u-2", Role::Customer);
        let err = caller.require_admin("delete category").unwrap_err();
        assert_eq!(
            err,
            AccountError::Forbidden {
                action: "delete category"
            }
        );
    }
}
