//! Behaviour every backend must share.
//!
//! Each check is written once against the store traits and run against
//! both `SqliteStore` and `MemoryStore`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use keyward_storage::{AccountStore, LicenseStore, MemoryStore, SqliteStore, StorageError};
use keyward_types::{Account, License};

fn base_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap()
}

fn license(key: &str, owner: &str) -> License {
    License {
        key: key.to_string(),
        owner: owner.to_string(),
        product: "foo".to_string(),
        one_time: false,
        expire_time: base_instant() + Duration::minutes(10),
        created_at: base_instant(),
    }
}

fn check_license_roundtrip<S: LicenseStore>(store: &S) {
    let original = License {
        one_time: true,
        ..license("aaaa-bbbb", "alice1")
    };
    store.insert_license(&original).unwrap();
    assert_eq!(store.get_license("aaaa-bbbb").unwrap(), Some(original));
}

fn check_missing_license_is_none<S: LicenseStore>(store: &S) {
    assert!(store.get_license("no-such-key").unwrap().is_none());
}

fn check_duplicate_key_conflicts<S: LicenseStore>(store: &S) {
    store.insert_license(&license("dup", "alice1")).unwrap();
    let err = store.insert_license(&license("dup", "bob123")).unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));
    assert_eq!(store.get_license("dup").unwrap().unwrap().owner, "alice1");
}

fn check_conditional_update_matches_owner<S: LicenseStore>(store: &S) {
    store.insert_license(&license("cond", "alice1")).unwrap();
    let new_expiry = base_instant() + Duration::minutes(30);

    assert_eq!(store.update_expire_time("cond", "bob123", new_expiry).unwrap(), 0);
    assert_eq!(
        store.get_license("cond").unwrap().unwrap().expire_time,
        base_instant() + Duration::minutes(10)
    );

    assert_eq!(store.update_expire_time("cond", "alice1", new_expiry).unwrap(), 1);
    assert_eq!(store.get_license("cond").unwrap().unwrap().expire_time, new_expiry);
}

fn check_conditional_update_on_missing_key<S: LicenseStore>(store: &S) {
    assert_eq!(
        store
            .update_expire_time("ghost", "alice1", base_instant())
            .unwrap(),
        0
    );
}

fn check_account_lifecycle<S: AccountStore>(store: &S) {
    assert!(!store.login_exists("alice1").unwrap());
    store.insert_account(&Account::new("alice1", "$argon2id$hash")).unwrap();
    assert!(store.login_exists("alice1").unwrap());

    let loaded = store.get_account("alice1").unwrap().unwrap();
    assert_eq!(loaded.login, "alice1");
    assert_eq!(loaded.password_hash, "$argon2id$hash");
    assert!(store.get_account("bob123").unwrap().is_none());
}

fn check_duplicate_login_conflicts<S: AccountStore>(store: &S) {
    store.insert_account(&Account::new("alice1", "first")).unwrap();
    let err = store.insert_account(&Account::new("alice1", "second")).unwrap_err();
    assert!(matches!(err, StorageError::Conflict(_)));
    assert_eq!(store.get_account("alice1").unwrap().unwrap().password_hash, "first");
}

macro_rules! conformance {
    ($module:ident, $make:expr) => {
        mod $module {
            use super::*;

            #[test]
            fn license_roundtrip() {
                check_license_roundtrip(&$make);
            }

            #[test]
            fn missing_license_is_none() {
                check_missing_license_is_none(&$make);
            }

            #[test]
            fn duplicate_key_conflicts() {
                check_duplicate_key_conflicts(&$make);
            }

            #[test]
            fn conditional_update_matches_owner() {
                check_conditional_update_matches_owner(&$make);
            }

            #[test]
            fn conditional_update_on_missing_key() {
                check_conditional_update_on_missing_key(&$make);
            }

            #[test]
            fn account_lifecycle() {
                check_account_lifecycle(&$make);
            }

            #[test]
            fn duplicate_login_conflicts() {
                check_duplicate_login_conflicts(&$make);
            }
        }
    };
}

conformance!(sqlite, SqliteStore::open_in_memory().unwrap());
conformance!(memory, MemoryStore::new());
