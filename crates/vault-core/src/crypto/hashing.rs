//! Salted one-way hashing of secrets using Argon2id
//!
//! Records keep a PHC-format hash next to the reversible token. Nothing in
//! the read path consults it.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use rand::rngs::OsRng;

use crate::error::{Result, VaultError};

/// Cost parameters for secret hashing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    /// Memory cost in KiB (default: 19456 = 19 MiB)
    pub memory_cost: u32,
    /// Time cost / iterations (default: 2)
    pub time_cost: u32,
    /// Parallelism (default: 1)
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_cost: 19456,
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl HashCost {
    /// Minimal parameters, for tests and constrained hosts
    pub fn minimal() -> Self {
        Self {
            memory_cost: Params::MIN_M_COST.max(8 * Params::MIN_P_COST),
            time_cost: Params::MIN_T_COST,
            parallelism: Params::MIN_P_COST,
        }
    }

    fn hasher(&self) -> Result<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| VaultError::HashError(e.to_string()))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hash a secret with a fresh random salt, returning a PHC string
pub fn hash_secret(secret: &str, cost: &HashCost) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = cost
        .hasher()?
        .hash_password(secret.as_bytes(), &salt)
        .map_err(|e| VaultError::HashError(e.to_string()))?;

    Ok(hash.to_string())
}

/// Check a secret against a PHC string produced by [`hash_secret`]
pub fn verify_secret(secret: &str, phc: &str) -> bool {
    match PasswordHash::new(phc) {
        Ok(parsed) => Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
