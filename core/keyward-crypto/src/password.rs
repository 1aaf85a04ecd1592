//! One-way hashing of account secrets.
//!
//! Uses Argon2id. Hashes are emitted as PHC strings, so the salt and the
//! work factor travel with the hash and verification needs no other input.

use crate::error::{CryptoError, CryptoResult};
use crate::random::random_bytes;
use argon2::password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Argon2, Params, Version};

/// Size of the per-hash salt in bytes.
pub const SALT_SIZE: usize = 16;

/// Argon2 work factor.
///
/// Default values are tuned for a balance of security and latency on a
/// request path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashParams {
    /// Memory cost in KiB.
    pub memory_cost: u32,
    /// Time cost (iterations).
    pub time_cost: u32,
    /// Parallelism factor.
    pub parallelism: u32,
}

impl Default for HashParams {
    fn default() -> Self {
        // OWASP recommendations for Argon2id (2023)
        Self {
            memory_cost: 19 * 1024, // 19 MiB
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl HashParams {
    /// Cheapest settings worth using; for tests and local development only.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            memory_cost: 1024, // 1 MiB
            time_cost: 1,
            parallelism: 1,
        }
    }

    fn hasher(&self) -> CryptoResult<Argon2<'static>> {
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|e| CryptoError::InvalidParams(e.to_string()))?;
        Ok(Argon2::new(argon2::Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hashes `password` with a fresh random salt.
///
/// # Errors
///
/// Fails if entropy is unavailable or the parameters are rejected by Argon2.
pub fn hash_password(password: &str, params: &HashParams) -> CryptoResult<String> {
    let salt_bytes = random_bytes(SALT_SIZE)?;
    let salt =
        SaltString::encode_b64(&salt_bytes).map_err(|e| CryptoError::Hashing(e.to_string()))?;

    let hash = params
        .hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| CryptoError::Hashing(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks `password` against a PHC hash produced by [`hash_password`].
///
/// Returns `Ok(false)` on a mismatch. The work factor is read from the hash,
/// so hashes made under older parameters still verify.
///
/// # Errors
///
/// Fails if `phc` cannot be parsed or Argon2 errors for another reason.
pub fn verify_password(password: &str, phc: &str) -> CryptoResult<bool> {
    let parsed = PasswordHash::new(phc).map_err(|e| CryptoError::MalformedHash(e.to_string()))?;

    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        Err(e) => Err(CryptoError::Hashing(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_phc_argon2id() {
        let hash = hash_password("password123", &HashParams::minimal()).unwrap();
        assert!(hash.starts_with("$argon2id$v=19$"));
        assert!(hash.contains("m=1024,t=1,p=1"));
    }

    #[test]
    fn zero_memory_rejected() {
        let params = HashParams {
            memory_cost: 0,
            time_cost: 1,
            parallelism: 1,
        };
        let err = hash_password("password123", &params).unwrap_err();
        assert!(matches!(err, CryptoError::InvalidParams(_)));
    }
}
