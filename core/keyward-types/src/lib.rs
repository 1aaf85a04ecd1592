//! Core type definitions for keyward.
//!
//! This crate defines the records shared by every layer of the service:
//! - License records and the soft validity report handed to anonymous callers
//! - Account records (login + one-way credential hash)
//! - A `Clock` seam so that "now" always comes from a single injected source
//!
//! Validity is never stored. It is derived by comparing `expire_time` with
//! the current instant, so invalidation and natural expiry look identical.

mod account;
mod clock;
mod license;

pub use account::Account;
pub use clock::{Clock, ManualClock, SystemClock};
pub use license::{License, LicenseCheck, LicenseState};
