//! Error types for the license lifecycle.

use keyward_crypto::CryptoError;
use keyward_storage::StorageError;
use thiserror::Error;

/// License lifecycle errors.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Out-of-range input, such as a duration below the minimum.
    #[error("validation error: {0}")]
    Validation(String),

    /// No license has this key. Internal; mutations report
    /// `NotFoundOrForbidden`.
    #[error("license not found")]
    NotFound,

    /// The caller does not own the license. Internal; mutations report
    /// `NotFoundOrForbidden`.
    #[error("license belongs to another owner")]
    Forbidden,

    /// Key is unknown or not owned by the caller.
    #[error("license not found or not owned by caller")]
    NotFoundOrForbidden,

    /// Randomness source unavailable while generating a key.
    #[error("key generation failed: {0}")]
    Entropy(String),

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<CryptoError> for LicenseError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::Entropy(msg) => LicenseError::Entropy(msg),
            other => LicenseError::Entropy(other.to_string()),
        }
    }
}

impl LicenseError {
    /// Collapses `NotFound` and `Forbidden` into `NotFoundOrForbidden`.
    #[must_use]
    pub fn conceal_ownership(self) -> Self {
        match self {
            Self::NotFound | Self::Forbidden => Self::NotFoundOrForbidden,
            other => other,
        }
    }
}

/// Result type for license operations.
pub type LicenseResult<T> = Result<T, LicenseError>;
