//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`] - Builders for quotes, bookmaker markets and events.
//! - [`source`] - In-memory [`OddsSource`](crate::port::OddsSource) implementations.
//! - [`config`] - Canonical test configurations and snapshot fixtures.

pub mod config;
pub mod domain;
pub mod source;
