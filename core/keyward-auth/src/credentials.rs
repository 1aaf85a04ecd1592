//! Registration, login and token verification.

use crate::directory::AccountDirectory;
use crate::error::{AuthError, AuthResult};
use crate::token::TokenIssuer;
use keyward_crypto::{hash_password, verify_password, HashParams};
use keyward_storage::AccountStore;
use keyward_types::Account;
use tracing::{debug, info};

/// Minimum login length in bytes.
pub const MIN_LOGIN_LEN: usize = 6;

/// Minimum password length in bytes.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Turns secrets into verifiable hashes and identities into bearer tokens.
pub struct CredentialEngine<S> {
    directory: AccountDirectory<S>,
    tokens: TokenIssuer,
    hash_params: HashParams,
}

impl<S: AccountStore> CredentialEngine<S> {
    pub fn new(store: S, tokens: TokenIssuer, hash_params: HashParams) -> Self {
        Self {
            directory: AccountDirectory::new(store),
            tokens,
            hash_params,
        }
    }

    /// Registers a new account and returns a fresh access token for it.
    ///
    /// # Errors
    ///
    /// - `Validation` if either field is empty, the login is shorter than
    ///   [`MIN_LOGIN_LEN`] or the password shorter than [`MIN_PASSWORD_LEN`]
    /// - `LoginTaken` if the login already exists
    pub fn register(&self, login: &str, password: &str) -> AuthResult<String> {
        validate_registration(login, password)?;

        if !self.directory.is_login_free(login)? {
            return Err(AuthError::LoginTaken);
        }

        let password_hash = hash_password(password, &self.hash_params)?;
        self.directory.create(&Account::new(login, password_hash))?;
        info!(login, "account registered");

        self.tokens.issue(login)
    }

    /// Authenticates `login`/`password` and returns a fresh access token.
    ///
    /// Unknown logins and wrong passwords are indistinguishable to the caller.
    pub fn login(&self, login: &str, password: &str) -> AuthResult<String> {
        if login.is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let account = match self.directory.find(login) {
            Ok(account) => account,
            Err(AuthError::AccountNotFound) => {
                debug!(login, "login rejected: unknown account");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        if !verify_password(password, &account.password_hash)? {
            debug!(login, "login rejected: wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        self.tokens.issue(&account.login)
    }

    /// Mints a token for `login` without checking credentials.
    pub fn issue_token(&self, login: &str) -> AuthResult<String> {
        self.tokens.issue(login)
    }

    /// Verifies a bearer token and returns the login it is bound to.
    pub fn verify_token(&self, token: &str) -> AuthResult<String> {
        Ok(self.tokens.verify(token)?.login)
    }

    pub fn directory(&self) -> &AccountDirectory<S> {
        &self.directory
    }
}

fn validate_registration(login: &str, password: &str) -> AuthResult<()> {
    if login.is_empty() || password.is_empty() {
        return Err(AuthError::Validation(
            "login and password are required".to_string(),
        ));
    }
    if login.len() < MIN_LOGIN_LEN {
        return Err(AuthError::Validation(format!(
            "login must be at least {MIN_LOGIN_LEN} characters"
        )));
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AuthError::Validation(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_length_boundaries() {
        assert!(validate_registration("abcdef", "12345678").is_ok());
        assert!(validate_registration("abcde", "12345678").is_err());
        assert!(validate_registration("abcdef", "1234567").is_err());
        assert!(validate_registration("", "12345678").is_err());
        assert!(validate_registration("abcdef", "").is_err());
    }
}
