//! Cadence end-to-end test support
//!
//! Shared fixtures for the regression, property and journey suites.

pub mod fixtures;

pub use fixtures::{TestDataFactory, approx_eq, assert_close, ts};
