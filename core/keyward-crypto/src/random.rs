//! Operating-system entropy.

use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rand::RngCore;

/// Returns `len` bytes read from the operating-system CSPRNG.
///
/// # Errors
///
/// Returns [`CryptoError::Entropy`] if the randomness source is unavailable.
pub fn random_bytes(len: usize) -> CryptoResult<Vec<u8>> {
    let mut bytes = vec![0u8; len];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| CryptoError::Entropy(e.to_string()))?;
    Ok(bytes)
}
