//! Shared test helpers for license tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use keyward_license::LicenseEngine;
use keyward_storage::{LicenseStore, MemoryStore};
use keyward_types::ManualClock;
use std::sync::Arc;

pub const ALICE: &str = "alice1";
pub const BOB: &str = "bobby1";

pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 10, 0, 0).unwrap()
}

/// Engine over `store` with a manual clock set to [`start_instant`].
pub fn engine_over<S: LicenseStore>(store: S) -> (LicenseEngine<S>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_instant()));
    (LicenseEngine::new(store, clock.clone()), clock)
}

pub fn test_engine() -> (LicenseEngine<MemoryStore>, Arc<ManualClock>) {
    engine_over(MemoryStore::new())
}
