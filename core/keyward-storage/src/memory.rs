//! In-memory backend.

use crate::error::{StorageError, StorageResult};
use crate::store::{AccountStore, LicenseStore};
use chrono::{DateTime, Utc};
use keyward_types::{Account, License};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    licenses: HashMap<String, License>,
    accounts: HashMap<String, Account>,
}

/// License and account storage held in process memory.
///
/// Clones share the same tables. Uniqueness and conditional-update semantics
/// match [`SqliteStore`](crate::SqliteStore).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StorageResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| StorageError::Poisoned)
    }

    fn write(&self) -> StorageResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| StorageError::Poisoned)
    }
}

impl LicenseStore for MemoryStore {
    fn insert_license(&self, license: &License) -> StorageResult<()> {
        match self.write()?.licenses.entry(license.key.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(format!(
                "license key {}",
                license.key
            ))),
            Entry::Vacant(slot) => {
                slot.insert(license.clone());
                Ok(())
            }
        }
    }

    fn get_license(&self, key: &str) -> StorageResult<Option<License>> {
        Ok(self.read()?.licenses.get(key).cloned())
    }

    fn update_expire_time(
        &self,
        key: &str,
        owner: &str,
        expire_time: DateTime<Utc>,
    ) -> StorageResult<usize> {
        let mut tables = self.write()?;
        match tables.licenses.get_mut(key) {
            Some(license) if license.owner == owner => {
                license.expire_time = expire_time;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

impl AccountStore for MemoryStore {
    fn login_exists(&self, login: &str) -> StorageResult<bool> {
        Ok(self.read()?.accounts.contains_key(login))
    }

    fn insert_account(&self, account: &Account) -> StorageResult<()> {
        match self.write()?.accounts.entry(account.login.clone()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(format!("login {}", account.login))),
            Entry::Vacant(slot) => {
                slot.insert(account.clone());
                Ok(())
            }
        }
    }

    fn get_account(&self, login: &str) -> StorageResult<Option<Account>> {
        Ok(self.read()?.accounts.get(login).cloned())
    }
}
