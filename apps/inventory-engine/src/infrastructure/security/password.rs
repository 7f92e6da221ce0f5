//! Argon2id password hasher.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`),
//! so the cost parameters of each hash travel with it and verification keeps
//! working after the defaults change.

use argon2::password_hash::{self, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;

use crate::application::ports::{PasswordHashError, PasswordHasherPort};
use crate::domain::accounts::PasswordHash;

const SALT_LEN: usize = 16;

/// Password hasher backed by Argon2id with a random per-password salt.
#[derive(Debug, Clone)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Create a hasher with the library's recommended cost parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::with_params(Params::default())
    }

    /// Create a hasher with explicit cost parameters.
    #[must_use]
    pub const fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherPort for Argon2PasswordHasher {
    fn hash(&self, plain: &str) -> Result<PasswordHash, PasswordHashError> {
        if plain.is_empty() {
            return Err(PasswordHashError::EmptyPassword);
        }
        let mut salt = [0u8; SALT_LEN];
        rand::rng().fill_bytes(&mut salt);
        let salt = SaltString::encode_b64(&salt).map_err(|e| PasswordHashError::Hashing {
            message: e.to_string(),
        })?;
        let phc = self
            .argon2()
            .hash_password(plain.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::Hashing {
                message: e.to_string(),
            })?;
        Ok(PasswordHash::new(phc.to_string()))
    }

    fn verify(&self, plain: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        let parsed = password_hash::PasswordHash::new(hash.as_str()).map_err(|e| {
            PasswordHashError::MalformedHash {
                message: e.to_string(),
            }
        })?;
        match self.argon2().verify_password(plain.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(PasswordHashError::MalformedHash {
                message: e.to_string(),
            }),
        }
    }
}
