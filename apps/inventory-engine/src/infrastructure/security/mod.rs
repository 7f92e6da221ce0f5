//! Security Adapters
//!
//! Credential hashing used by the account directory.

pub mod password;

pub use password::Argon2PasswordHasher;
