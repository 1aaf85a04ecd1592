//! Issuance, validity, invalidation and extension of licenses.

use crate::error::{LicenseError, LicenseResult};
use crate::key::generate_key;
use chrono::{DateTime, Duration, Utc};
use keyward_storage::LicenseStore;
use keyward_types::{Clock, License, LicenseCheck};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Shortest duration, in minutes, accepted by issue and extend.
pub const MIN_DURATION_MINUTES: i64 = 5;

/// Owns the transition rules for license records.
///
/// Holds no mutable state of its own. Every call reads or writes the store.
pub struct LicenseEngine<S> {
    store: S,
    clock: Arc<dyn Clock>,
}

impl<S: LicenseStore> LicenseEngine<S> {
    pub fn new(store: S, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Creates a license owned by `owner`, live for `duration_minutes`.
    ///
    /// # Errors
    ///
    /// - `Validation` if `duration_minutes` is below [`MIN_DURATION_MINUTES`]
    /// - `Entropy` if no key could be generated
    /// - `Storage` on any backend failure, including a key collision
    pub fn issue(
        &self,
        owner: &str,
        product: &str,
        one_time: bool,
        duration_minutes: i64,
    ) -> LicenseResult<String> {
        let now = self.clock.now();
        let expire_time = offset(now, duration_minutes)?;

        let license = License {
            key: generate_key()?,
            owner: owner.to_string(),
            product: product.to_string(),
            one_time,
            expire_time,
            created_at: now,
        };
        self.store.insert_license(&license)?;
        info!(owner, product, %expire_time, "license issued");

        Ok(license.key)
    }

    /// Loads the license with `key`.
    pub fn fetch(&self, key: &str) -> LicenseResult<License> {
        self.store.get_license(key)?.ok_or(LicenseError::NotFound)
    }

    /// Reports whether `key` is currently valid.
    ///
    /// Never fails. Unknown keys and storage faults both report as an invalid
    /// key; the fault is logged.
    pub fn check_validity(&self, key: &str) -> LicenseCheck {
        match self.fetch(key) {
            Ok(license) => LicenseCheck::for_license(&license, self.clock.now()),
            Err(LicenseError::NotFound) => LicenseCheck::unknown(),
            Err(e) => {
                error!(error = %e, "validity check failed");
                LicenseCheck::unknown()
            }
        }
    }

    /// Ends the license now. Only its owner may do this.
    ///
    /// # Errors
    ///
    /// `NotFoundOrForbidden` if no license with `key` belongs to `owner`.
    pub fn invalidate(&self, owner: &str, key: &str) -> LicenseResult<()> {
        let now = self.clock.now();
        if self.store.update_expire_time(key, owner, now)? == 0 {
            debug!(owner, "invalidate matched no license");
            return Err(LicenseError::NotFoundOrForbidden);
        }
        info!(owner, "license invalidated");
        Ok(())
    }

    /// Extends the license by `additional_minutes`.
    ///
    /// A live license is extended from its current expiry. A lapsed one is
    /// extended from now.
    ///
    /// # Errors
    ///
    /// - `Validation` if `additional_minutes` is below [`MIN_DURATION_MINUTES`]
    /// - `NotFoundOrForbidden` if the key is unknown, belongs to someone else,
    ///   or changed hands before the write landed
    pub fn extend(&self, owner: &str, key: &str, additional_minutes: i64) -> LicenseResult<()> {
        validate_duration(additional_minutes)?;

        let license = self
            .fetch_owned(owner, key)
            .map_err(LicenseError::conceal_ownership)?;

        let now = self.clock.now();
        let base = if license.is_valid_at(now) {
            license.expire_time
        } else {
            now
        };
        let new_expire = offset(base, additional_minutes)?;

        if self.store.update_expire_time(key, owner, new_expire)? == 0 {
            debug!(owner, "extend lost race with a concurrent change");
            return Err(LicenseError::NotFoundOrForbidden);
        }
        info!(owner, %new_expire, "license extended");
        Ok(())
    }

    fn fetch_owned(&self, owner: &str, key: &str) -> LicenseResult<License> {
        let license = self.fetch(key)?;
        if !license.is_owned_by(owner) {
            return Err(LicenseError::Forbidden);
        }
        Ok(license)
    }
}

fn validate_duration(minutes: i64) -> LicenseResult<()> {
    if minutes < MIN_DURATION_MINUTES {
        return Err(LicenseError::Validation(format!(
            "duration must be at least {MIN_DURATION_MINUTES} minutes"
        )));
    }
    Ok(())
}

/// `base + minutes`, validated and overflow-checked.
fn offset(base: DateTime<Utc>, minutes: i64) -> LicenseResult<DateTime<Utc>> {
    validate_duration(minutes)?;
    Duration::try_minutes(minutes)
        .and_then(|d| base.checked_add_signed(d))
        .ok_or_else(|| LicenseError::Validation("duration is too large".to_string()))
}
