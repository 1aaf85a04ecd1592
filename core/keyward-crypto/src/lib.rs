//! Cryptographic primitives for keyward.
//!
//! - Argon2id hashing and verification of account secrets (PHC strings)
//! - Operating-system entropy for salts and license key material
//!
//! Nothing here keeps state between calls.

mod error;
mod password;
mod random;

pub use error::{CryptoError, CryptoResult};
pub use password::{hash_password, verify_password, HashParams, SALT_SIZE};
pub use random::random_bytes;
