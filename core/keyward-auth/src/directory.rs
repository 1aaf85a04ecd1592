//! Account lookup and login uniqueness.

use crate::error::{AuthError, AuthResult};
use keyward_storage::{AccountStore, StorageError};
use keyward_types::Account;

/// Owns uniqueness and lookup of account records.
pub struct AccountDirectory<S> {
    store: S,
}

impl<S: AccountStore> AccountDirectory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns true if no account uses `login`.
    pub fn is_login_free(&self, login: &str) -> AuthResult<bool> {
        Ok(!self.store.login_exists(login)?)
    }

    /// Creates an account.
    ///
    /// A concurrent duplicate that slips past the free-check is rejected by the
    /// store's unique constraint. Both paths surface as [`AuthError::LoginTaken`].
    pub fn create(&self, account: &Account) -> AuthResult<()> {
        if !self.is_login_free(&account.login)? {
            return Err(AuthError::LoginTaken);
        }
        match self.store.insert_account(account) {
            Ok(()) => Ok(()),
            Err(StorageError::Conflict(_)) => Err(AuthError::LoginTaken),
            Err(e) => Err(e.into()),
        }
    }

    /// Looks up an account by login.
    pub fn find(&self, login: &str) -> AuthResult<Account> {
        self.store
            .get_account(login)?
            .ok_or(AuthError::AccountNotFound)
    }
}
