//! Persistence for keyward.
//!
//! The engines depend only on the [`LicenseStore`] and [`AccountStore`]
//! contracts. Two backends implement them:
//!
//! - [`SqliteStore`]: durable storage on a single SQLite file (or `:memory:`)
//! - [`MemoryStore`]: process-local maps with identical semantics
//!
//! # Guarantees every backend must provide
//!
//! - Insert fails with [`StorageError::Conflict`] when the license key or the
//!   account login already exists. This is the authoritative uniqueness gate.
//! - [`LicenseStore::update_expire_time`] is a single conditional write scoped
//!   by `(key, owner)` and reports how many records it touched.

mod error;
mod memory;
mod sqlite;
mod store;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use store::{AccountStore, LicenseStore};
