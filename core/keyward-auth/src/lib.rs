//! Credential engine for keyward.
//!
//! This crate handles:
//! - Registration and login of accounts (Argon2id-hashed secrets)
//! - Login uniqueness via the [`AccountDirectory`]
//! - Issuance and verification of short-lived HS256 bearer tokens
//!
//! # Design Principles
//!
//! - **Stateless tokens**: no session store and no revocation list. A token
//!   is valid purely by signature and expiry.
//! - **Short lifetime**: tokens lapse 15 minutes after issuance by default.
//! - **Injected secret**: the signing secret arrives in a [`TokenConfig`] at
//!   construction. An empty secret is accepted and logged, never rejected.
//! - **Generic login failure**: an unknown login and a wrong password both
//!   surface as [`AuthError::InvalidCredentials`].

mod credentials;
mod directory;
mod error;
mod token;

pub use credentials::{CredentialEngine, MIN_LOGIN_LEN, MIN_PASSWORD_LEN};
pub use directory::AccountDirectory;
pub use error::{AuthError, AuthResult};
pub use token::{AccessClaims, TokenConfig, TokenIssuer, DEFAULT_TOKEN_TTL_MINUTES};
