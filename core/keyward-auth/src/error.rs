//! Error types for the credential engine.

use keyward_crypto::CryptoError;
use keyward_storage::StorageError;
use thiserror::Error;

/// Result type for credential operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Registration, login and token errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Registration input is missing or too short.
    #[error("validation error: {0}")]
    Validation(String),

    /// Another account already uses this login.
    #[error("login is already taken")]
    LoginTaken,

    /// No account has this login. Internal; login reports `InvalidCredentials`.
    #[error("account not found")]
    AccountNotFound,

    /// Unknown login or wrong password.
    #[error("incorrect login or password")]
    InvalidCredentials,

    /// Token is structurally malformed or its payload is unusable.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// Signature verification failed.
    #[error("invalid token signature")]
    InvalidSignature,

    /// Token was signed with an algorithm outside the HMAC family.
    #[error("unsupported token algorithm")]
    UnsupportedAlgorithm,

    /// Token lifetime has elapsed.
    #[error("token expired")]
    TokenExpired,

    /// Token could not be signed.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// Hashing or entropy failure.
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl AuthError {
    /// Returns true for errors that mean "the caller is not authenticated".
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::InvalidToken(_)
                | Self::InvalidSignature
                | Self::UnsupportedAlgorithm
                | Self::TokenExpired
        )
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;

        match err.kind() {
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                AuthError::UnsupportedAlgorithm
            }
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::MissingRequiredClaim(claim) => {
                AuthError::InvalidToken(format!("missing claim: {claim}"))
            }
            _ => AuthError::InvalidToken(err.to_string()),
        }
    }
}
