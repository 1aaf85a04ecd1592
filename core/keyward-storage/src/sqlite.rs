//! SQLite backend.
//!
//! One connection guarded by a mutex; every public call is a single
//! statement, so the mutex is also the only serialization point.

use crate::error::{StorageError, StorageResult};
use crate::store::{AccountStore, LicenseStore};
use chrono::{DateTime, Utc};
use keyward_types::{Account, License};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::debug;

const MEMORY_PATH: &str = ":memory:";

/// License and account storage backed by SQLite.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStore {
    /// Opens (or creates) a store at `path`.
    ///
    /// Missing parent directories are created. `":memory:"` opens a private
    /// in-memory database.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        if path == Path::new(MEMORY_PATH) {
            return Self::open_in_memory();
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        debug!(path = %path.display(), "opening sqlite store");
        Self::from_connection(Connection::open(path)?)
    }

    /// Opens an in-memory store (for testing).
    pub fn open_in_memory() -> StorageResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> StorageResult<Self> {
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> StorageResult<()> {
        self.conn()?.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS licenses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                key TEXT NOT NULL UNIQUE,
                owner TEXT NOT NULL,
                product TEXT NOT NULL,
                one_time BOOLEAN NOT NULL,
                expire_time TEXT NOT NULL,
                created_at TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS accounts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                login TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL
            );
            ",
        )?;
        Ok(())
    }

    fn conn(&self) -> StorageResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }
}

/// Turns a unique-constraint failure into `Conflict`, passing others through.
fn map_insert_error(err: rusqlite::Error, what: impl Into<String>) -> StorageError {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if failure.code == ErrorCode::ConstraintViolation =>
        {
            StorageError::Conflict(what.into())
        }
        _ => StorageError::Database(err),
    }
}

impl LicenseStore for SqliteStore {
    fn insert_license(&self, license: &License) -> StorageResult<()> {
        self.conn()?
            .execute(
                "INSERT INTO licenses (key, owner, product, one_time, expire_time, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    license.key,
                    license.owner,
                    license.product,
                    license.one_time,
                    license.expire_time,
                    license.created_at,
                ],
            )
            .map_err(|e| map_insert_error(e, format!("license key {}", license.key)))?;
        Ok(())
    }

    fn get_license(&self, key: &str) -> StorageResult<Option<License>> {
        let license = self
            .conn()?
            .query_row(
                "SELECT key, owner, product, one_time, expire_time, created_at
                 FROM licenses WHERE key = ?1",
                params![key],
                |row| {
                    Ok(License {
                        key: row.get(0)?,
                        owner: row.get(1)?,
                        product: row.get(2)?,
                        one_time: row.get(3)?,
                        expire_time: row.get(4)?,
                        created_at: row.get(5)?,
                    })
                },
            )
            .optional()?;
        Ok(license)
    }

    fn update_expire_time(
        &self,
        key: &str,
        owner: &str,
        expire_time: DateTime<Utc>,
    ) -> StorageResult<usize> {
        let rows = self.conn()?.execute(
            "UPDATE licenses SET expire_time = ?1 WHERE key = ?2 AND owner = ?3",
            params![expire_time, key, owner],
        )?;
        Ok(rows)
    }
}

impl AccountStore for SqliteStore {
    fn login_exists(&self, login: &str) -> StorageResult<bool> {
        let found: Option<i64> = self
            .conn()?
            .query_row(
                "SELECT 1 FROM accounts WHERE login = ?1",
                params![login],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    fn insert_account(&self, account: &Account) -> StorageResult<()> {
        self.conn()?
            .execute(
                "INSERT INTO accounts (login, password_hash) VALUES (?1, ?2)",
                params![account.login, account.password_hash],
            )
            .map_err(|e| map_insert_error(e, format!("login {}", account.login)))?;
        Ok(())
    }

    fn get_account(&self, login: &str) -> StorageResult<Option<Account>> {
        let account = self
            .conn()?
            .query_row(
                "SELECT login, password_hash FROM accounts WHERE login = ?1",
                params![login],
                |row| {
                    Ok(Account {
                        login: row.get(0)?,
                        password_hash: row.get(1)?,
                    })
                },
            )
            .optional()?;
        Ok(account)
    }
}
