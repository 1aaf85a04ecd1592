//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying `{login, iat, exp}`. Verification accepts
//! any HMAC-family algorithm, rejects everything else, and checks expiry
//! against the injected clock rather than the system time.

use crate::error::{AuthError, AuthResult};
use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use keyward_types::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Default token lifetime in minutes.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Signing configuration, loaded once at startup.
#[derive(Clone)]
pub struct TokenConfig {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenConfig {
    /// Creates a config with the default 15-minute lifetime.
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    /// Overrides the token lifetime.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    #[must_use]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// True when tokens would be signed with an empty key.
    #[must_use]
    pub fn has_empty_secret(&self) -> bool {
        self.secret.is_empty()
    }
}

impl std::fmt::Debug for TokenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenConfig")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Claims carried by an access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Account login the token is bound to.
    pub login: String,
    /// Issued at (seconds since epoch).
    pub iat: i64,
    /// Expiration time (seconds since epoch).
    pub exp: i64,
}

/// Mints and verifies access tokens.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        if config.has_empty_secret() {
            warn!("token signing secret is empty; tokens are forgeable until one is configured");
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // Expiry is checked against the injected clock in `verify`.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.secret),
            decoding_key: DecodingKey::from_secret(&config.secret),
            validation,
            ttl: config.ttl,
            clock,
        }
    }

    /// Signs a token for `login`, valid from now until now + ttl.
    pub fn issue(&self, login: &str) -> AuthResult<String> {
        let now = self.clock.now();
        let claims = AccessClaims {
            login: login.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verifies signature, algorithm family, structure and expiry.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` for malformed tokens or an empty `login` claim
    /// - `InvalidSignature` when the signature does not match
    /// - `UnsupportedAlgorithm` for non-HMAC algorithms
    /// - `TokenExpired` once `exp` is reached
    pub fn verify(&self, token: &str) -> AuthResult<AccessClaims> {
        let claims = decode::<AccessClaims>(token, &self.decoding_key, &self.validation)?.claims;

        if claims.exp <= self.clock.now().timestamp() {
            return Err(AuthError::TokenExpired);
        }
        if claims.login.is_empty() {
            return Err(AuthError::InvalidToken("empty login claim".to_string()));
        }

        Ok(claims)
    }
}
