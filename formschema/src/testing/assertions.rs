//! Test assertions for check results.

use crate::core::{CheckResult, SchemaCheckResult};
use std::fmt::Debug;

/// Asserts that a value passed.
pub fn assert_valid<M: Debug>(result: &CheckResult<M>) {
    assert!(
        !result.has_error,
        "Expected a valid result, got error: {:?}",
        result.error_message
    );
}

/// Asserts that a value failed.
pub fn assert_invalid<M: Debug>(result: &CheckResult<M>) {
    assert!(
        result.has_error,
        "Expected an invalid result, but the value passed"
    );
}

/// Asserts that a value failed with the expected message.
pub fn assert_error_message<M: Debug + PartialEq>(result: &CheckResult<M>, expected: &M) {
    assert_invalid(result);
    assert_eq!(
        result.error_message.as_ref(),
        Some(expected),
        "Expected message {:?}, got {:?}",
        expected,
        result.error_message
    );
}

/// Asserts that every field of a record passed.
pub fn assert_schema_valid<M: Debug>(result: &SchemaCheckResult<M>) {
    assert!(
        !result.has_error,
        "Expected a valid record, failing fields: {:?}",
        result.errors().collect::<Vec<_>>()
    );
}

/// Asserts that the record failed exactly on `fields`, in declaration order.
pub fn assert_schema_invalid<M: Debug>(result: &SchemaCheckResult<M>, fields: &[&str]) {
    let failing: Vec<&str> = result.errors().map(|(name, _)| name.as_str()).collect();
    assert!(result.has_error, "Expected an invalid record, but every field passed");
    assert_eq!(
        failing, fields,
        "Expected failing fields {:?}, got {:?}",
        fields, failing
    );
}
