#![forbid(unsafe_code)]
//! Copydesk: drive a CMS content store and admin screens from acceptance scenarios.
//!
//! Scenario model highlights:
//! - Fixture tables become record-creation requests; human-readable references
//!   (author logins, entity titles, term names) are resolved against the store
//!   before any mutation is submitted, and fail loudly when absent.
//! - Assertions re-read live state (invalidating any per-entity read cache
//!   first) and abort the scenario with expected/actual on mismatch.
//! - The store and the browser are trait seams (`adapters`); in-memory
//!   implementations back the test suite.

pub mod constants;
pub mod adapters;
pub mod api;
pub mod logging;
pub mod types;

pub use api::*;
