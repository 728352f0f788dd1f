//! Testing utilities for schemas and types.
//!
//! This module provides:
//! - Assertions for check results
//! - Log capture setup for tests

mod assertions;

pub use assertions::{
    assert_error_message, assert_invalid, assert_schema_invalid, assert_schema_valid,
    assert_valid,
};

use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber.
///
/// Honors `RUST_LOG`; defaults to `formschema=debug`. Safe to call from
/// every test, only the first call installs anything.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("formschema=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}
