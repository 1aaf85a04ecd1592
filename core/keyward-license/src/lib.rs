//! License keys and their lifecycle for keyward.
//!
//! This crate handles:
//! - Generation of unguessable, dash-grouped hex license keys
//! - Issuance of time-bounded licenses under an owner's login
//! - Anonymous validity checks that reveal nothing about owner or product
//! - Owner-gated invalidation and extension
//!
//! # Design Principles
//!
//! - **Timestamp is the state**: a license is active iff `now < expire_time`.
//!   Invalidation moves `expire_time` to now; extension can revive it.
//! - **Storage is the arbiter**: every mutation is one conditional write on
//!   `(key, owner)`. Zero affected rows is final, whatever an earlier read saw.
//! - **No ownership leaks**: a missing key and someone else's key fail the
//!   same way.
//!
//! # License Key Format
//!
//! 16 random bytes, lowercase hex, grouped in blocks of four:
//! `a1b2-c3d4-e5f6-0718-293a-4b5c-6d7e-8f90`.

mod error;
mod key;
mod lifecycle;

pub use error::{LicenseError, LicenseResult};
pub use key::{generate_key, generate_key_with, DEFAULT_KEY_BYTES, KEY_GROUP_LEN};
pub use lifecycle::{LicenseEngine, MIN_DURATION_MINUTES};
