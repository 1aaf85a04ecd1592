//! License key generation.

use crate::error::LicenseResult;
use keyward_crypto::random_bytes;

/// Bytes of entropy in a default key.
pub const DEFAULT_KEY_BYTES: usize = 16;

/// Hex characters per dash-separated block.
pub const KEY_GROUP_LEN: usize = 4;

/// Generates a key from [`DEFAULT_KEY_BYTES`] of OS randomness.
///
/// # Errors
///
/// `Entropy` if the randomness source is unavailable.
pub fn generate_key() -> LicenseResult<String> {
    generate_key_with(DEFAULT_KEY_BYTES)
}

/// Generates a key from `n_bytes` of OS randomness. Zero selects the default.
pub fn generate_key_with(n_bytes: usize) -> LicenseResult<String> {
    let n_bytes = if n_bytes == 0 { DEFAULT_KEY_BYTES } else { n_bytes };
    let bytes = random_bytes(n_bytes)?;
    Ok(group(&hex::encode(bytes)))
}

fn group(hex: &str) -> String {
    let mut out = String::with_capacity(hex.len() + hex.len() / KEY_GROUP_LEN);
    for (i, c) in hex.chars().enumerate() {
        if i > 0 && i % KEY_GROUP_LEN == 0 {
            out.push('-');
        }
        out.push(c);
    }
    out
}
