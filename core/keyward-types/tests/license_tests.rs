use chrono::{DateTime, Duration, TimeZone, Utc};
use keyward_types::{Account, License, LicenseCheck, LicenseState};
use proptest::prelude::*;

fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 0, 0, 0).unwrap()
}

fn sample_license(expire_time: DateTime<Utc>) -> License {
    License {
        key: "a1b2-c3d4-e5f6-0718-293a-4b5c-6d7e-8f90".to_string(),
        owner: "alice1".to_string(),
        product: "foo".to_string(),
        one_time: true,
        expire_time,
        created_at: base_instant(),
    }
}

// ── Validity ─────────────────────────────────────────────────────

#[test]
fn live_license_reports_valid() {
    let license = sample_license(base_instant() + Duration::minutes(10));
    let check = LicenseCheck::for_license(&license, base_instant());
    assert!(check.valid);
    assert_eq!(check.message, "valid");
    assert_eq!(check.expire_time, Some(license.expire_time));
}

#[test]
fn lapsed_license_reports_expired() {
    let license = sample_license(base_instant());
    let check = LicenseCheck::for_license(&license, base_instant() + Duration::seconds(1));
    assert!(!check.valid);
    assert_eq!(check.message, "expired");
    assert_eq!(license.state_at(base_instant()), LicenseState::Expired);
}

#[test]
fn unknown_key_report() {
    let check = LicenseCheck::unknown();
    assert!(!check.valid);
    assert_eq!(check.message, "invalid key");
    assert!(check.expire_time.is_none());
}

#[test]
fn ownership_is_exact_match() {
    let license = sample_license(base_instant());
    assert!(license.is_owned_by("alice1"));
    assert!(!license.is_owned_by("Alice1"));
    assert!(!license.is_owned_by("alice"));
}

#[test]
fn state_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&LicenseState::Active).unwrap(), "\"active\"");
    assert_eq!(serde_json::to_string(&LicenseState::Expired).unwrap(), "\"expired\"");
}

// ── Account ──────────────────────────────────────────────────────

#[test]
fn account_debug_redacts_hash() {
    let account = Account::new("alice1", "$argon2id$v=19$secret-material");
    let debug = format!("{account:?}");
    assert!(debug.contains("alice1"));
    assert!(!debug.contains("secret-material"));
}

proptest! {
    /// Validity is exactly `now < expire_time`.
    #[test]
    fn validity_matches_strict_comparison(offset_secs in -100_000i64..100_000) {
        let license = sample_license(base_instant());
        let now = base_instant() + Duration::seconds(offset_secs);
        let check = LicenseCheck::for_license(&license, now);
        prop_assert_eq!(check.valid, offset_secs < 0);
        prop_assert_eq!(license.state_at(now) == LicenseState::Active, offset_secs < 0);
    }
}
