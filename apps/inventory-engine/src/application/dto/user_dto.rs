//! User DTOs

use serde::{Deserialize, Serialize};

use crate::domain::accounts::{Role, User, UserProfile};
use crate::domain::shared::Timestamp;

/// DTO for creating an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Role; customers by default.
    #[serde(default)]
    pub role: Role,
}

impl CreateUserDto {
    /// Profile portion of the request.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }
}

/// DTO for editing the caller's own profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileDto {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// New password; absent or blank keeps the current one.
    #[serde(default)]
    pub password: Option<String>,
}

impl UpdateProfileDto {
    /// Profile portion of the request.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }

    /// The new password, if one was supplied.
    #[must_use]
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.trim().is_empty())
    }
}

/// DTO representing an account. Never carries the password digest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    /// User ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Role.
    pub role: Role,
    /// Created at.
    pub created_at: Timestamp,
}

impl UserDto {
    /// Create from domain User.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            address: user.address().to_string(),
            role: user.role(),
            created_at: user.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_defaults_to_customer() {
        let dto: CreateUserDto =
            serde_json::from_str(r#"{"name":"Ada","email":"a@b.c","password":"pw"}"#).unwrap();
        assert_eq!(dto.role, Role::Customer);
        assert_eq!(dto.address, "");
    }

    #[test]
    fn blank_password_is_ignored() {
        let dto: UpdateProfileDto =
            serde_json::from_str(r#"{"name":"Ada","email":"a@b.c","password":"  "}"#).unwrap();
        assert_eq!(dto.new_password(), None);
    }
}
