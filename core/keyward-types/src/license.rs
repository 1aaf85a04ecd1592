//! License records and validity reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted license record.
///
/// `key`, `owner`, `product`, `one_time` and `created_at` never change after
/// creation. `expire_time` moves only through extension or invalidation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Opaque, globally unique license key.
    pub key: String,
    /// Login of the account that issued the license.
    pub owner: String,
    /// Free-form label naming what the license governs.
    pub product: String,
    /// Single-use marker. Stored and returned, never enforced.
    pub one_time: bool,
    /// Instant after which the license is no longer valid.
    pub expire_time: DateTime<Utc>,
    /// Instant of creation.
    pub created_at: DateTime<Utc>,
}

impl License {
    /// Returns true if the license is live at `now` (`now < expire_time`).
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expire_time
    }

    /// Returns the derived lifecycle state at `now`.
    #[must_use]
    pub fn state_at(&self, now: DateTime<Utc>) -> LicenseState {
        if self.is_valid_at(now) {
            LicenseState::Active
        } else {
            LicenseState::Expired
        }
    }

    /// Returns true if `login` is the owner of this license.
    #[must_use]
    pub fn is_owned_by(&self, login: &str) -> bool {
        self.owner == login
    }
}

/// Lifecycle state of a license, derived from `expire_time` versus now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseState {
    /// `now < expire_time`.
    Active,
    /// `now >= expire_time`, whether by time passing or by invalidation.
    Expired,
}

/// Result of an anonymous validity check.
///
/// Carries only validity, expiry and a message, never owner or product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseCheck {
    pub valid: bool,
    /// `None` when the key is unknown.
    pub expire_time: Option<DateTime<Utc>>,
    pub message: String,
}

impl LicenseCheck {
    pub const MESSAGE_VALID: &'static str = "valid";
    pub const MESSAGE_EXPIRED: &'static str = "expired";
    pub const MESSAGE_UNKNOWN: &'static str = "invalid key";

    /// Report for a key that matches no record.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            valid: false,
            expire_time: None,
            message: Self::MESSAGE_UNKNOWN.to_string(),
        }
    }

    /// Report for an existing license evaluated at `now`.
    #[must_use]
    pub fn for_license(license: &License, now: DateTime<Utc>) -> Self {
        let valid = license.is_valid_at(now);
        let message = if valid {
            Self::MESSAGE_VALID
        } else {
            Self::MESSAGE_EXPIRED
        };
        Self {
            valid,
            expire_time: Some(license.expire_time),
            message: message.to_string(),
        }
    }
}
