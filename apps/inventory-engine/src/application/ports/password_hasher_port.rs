//! Password Hasher Port (Driven Port)
//!
//! Interface for turning plaintext passwords into stored digests.

use crate::domain::accounts::PasswordHash;

/// Password hashing error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum PasswordHashError {
    /// Plaintext was empty.
    #[error("Password must not be empty")]
    EmptyPassword,

    /// The hashing backend failed.
    #[error("Password hashing failed: {message}")]
    Hashing { message: String },

    /// Stored digest could not be decoded.
    #[error("Malformed password hash: {message}")]
    MalformedHash { message: String },
}

/// Port for password hashing.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasherPort: Send + Sync {
    /// Hash a plaintext password with a fresh salt.
    fn hash(&self, plain: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check a plaintext password against a stored digest.
    fn verify(&self, plain: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}
