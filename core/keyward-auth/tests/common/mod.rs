//! Shared test helpers for credential tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use keyward_auth::{CredentialEngine, TokenConfig, TokenIssuer};
use keyward_crypto::HashParams;
use keyward_storage::MemoryStore;
use keyward_types::ManualClock;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

/// Fixed starting instant for time-driven tests.
pub fn start_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 4, 1, 10, 0, 0).unwrap()
}

pub fn issuer_with(secret: &str, clock: Arc<ManualClock>) -> TokenIssuer {
    TokenIssuer::new(TokenConfig::new(secret), clock)
}

/// Engine over an empty in-memory store and a manual clock.
pub fn test_engine() -> (CredentialEngine<MemoryStore>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(start_instant()));
    let engine = CredentialEngine::new(
        MemoryStore::new(),
        issuer_with(TEST_SECRET, clock.clone()),
        HashParams::minimal(),
    );
    (engine, clock)
}
