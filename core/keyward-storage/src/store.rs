//! Storage contracts consumed by the engines.

use crate::error::StorageResult;
use chrono::{DateTime, Utc};
use keyward_types::{Account, License};

/// License persistence.
pub trait LicenseStore: Send + Sync {
    /// Inserts a new license.
    ///
    /// Fails with `StorageError::Conflict` if the key is already taken.
    fn insert_license(&self, license: &License) -> StorageResult<()>;

    /// Point lookup by license key.
    fn get_license(&self, key: &str) -> StorageResult<Option<License>>;

    /// Sets `expire_time` on the record matching both `key` and `owner`.
    ///
    /// Returns the number of records updated. Zero means the record does
    /// not exist or belongs to someone else.
    fn update_expire_time(
        &self,
        key: &str,
        owner: &str,
        expire_time: DateTime<Utc>,
    ) -> StorageResult<usize>;
}

/// Account persistence.
pub trait AccountStore: Send + Sync {
    /// Returns true if an account with this login exists.
    fn login_exists(&self, login: &str) -> StorageResult<bool>;

    /// Inserts a new account.
    ///
    /// Fails with `StorageError::Conflict` if the login is already taken.
    fn insert_account(&self, account: &Account) -> StorageResult<()>;

    /// Point lookup by login.
    fn get_account(&self, login: &str) -> StorageResult<Option<Account>>;
}
