//! Error types for the crypto layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// The operating-system randomness source could not be read.
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    /// Argon2 rejected the configured work factor.
    #[error("invalid hash parameters: {0}")]
    InvalidParams(String),

    /// Hashing or verification failed for a reason other than a mismatch.
    #[error("password hashing failed: {0}")]
    Hashing(String),

    /// Stored hash is not a parseable PHC string.
    #[error("malformed password hash: {0}")]
    MalformedHash(String),
}
