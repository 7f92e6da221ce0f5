//! User entity.

use std::fmt;

use super::errors::AccountError;
use super::role::Role;
use crate::domain::shared::{DomainError, Timestamp, UserId};

/// An opaque password digest in PHC string format.
///
/// Produced and checked by a password hasher; never exposed in responses.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded digest.
    #[must_use]
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}

/// Profile fields a user may edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Login email; unique, compared case-insensitively.
    pub email: String,
    /// Postal address.
    pub address: String,
}

impl UserProfile {
    /// Trim, lower-case the email and validate.
    ///
    /// # Errors
    ///
    /// Returns error if the name is blank or the email is malformed.
    pub fn normalized(self) -> Result<Self, AccountError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(DomainError::blank("name").into());
        }
        let email = self.email.trim().to_lowercase();
        if email.is_empty() {
            return Err(DomainError::blank("email").into());
        }
        if !email.contains('@') {
            return Err(DomainError::InvalidValue {
                field: "email".to_string(),
                message: format!("'{email}' is not an email address"),
            }
            .into());
        }
        Ok(Self {
            name,
            email,
            address: self.address.trim().to_string(),
        })
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    address: String,
    password_hash: PasswordHash,
    role: Role,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl User {
    /// Register a new account with a generated ID.
    ///
    /// # Errors
    ///
    /// Returns error if the profile fails validation.
    pub fn register(
        profile: UserProfile,
        password_hash: PasswordHash,
        role: Role,
    ) -> Result<Self, AccountError> {
        Self::with_id(UserId::generate(), profile, password_hash, role)
    }

    /// Register an account with a caller-chosen ID (seed data).
    ///
    /// # Errors
    ///
    /// Returns error if the profile fails validation.
    pub fn with_id(
        id: UserId,
        profile: UserProfile,
        password_hash: PasswordHash,
        role: Role,
    ) -> Result<Self, AccountError> {
        let profile = profile.normalized()?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            name: profile.name,
            email: profile.email,
            address: profile.address,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace profile fields and optionally the password.
    ///
    /// # Errors
    ///
    /// Returns error if the profile fails validation; the user is unchanged.
    pub fn update_profile(
        &mut self,
        profile: UserProfile,
        password_hash: Option<PasswordHash>,
    ) -> Result<(), AccountError> {
        let profile = profile.normalized()?;
        self.name = profile.name;
        self.email = profile.email;
        self.address = profile.address;
        if let Some(hash) = password_hash {
            self.password_hash = hash;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// User ID.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Stored password digest.
    #[must_use]
    pub const fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Account role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns true if `email` matches this account, ignoring case.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }
}
