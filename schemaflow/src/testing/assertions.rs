//! Test assertions for hook results.

use crate::errors::{HookError, ValidationError};
use crate::request::{Part, Request};

/// Asserts that a hook failed validation with `status_code`, returning the error.
pub fn assert_validation_failed(result: Result<(), HookError>, status_code: u16) -> ValidationError {
    match result {
        Ok(()) => panic!("Expected validation failure with status {status_code}, got success"),
        Err(HookError::Schema(fault)) => {
            panic!("Expected validation failure with status {status_code}, got schema fault: {fault}")
        }
        Err(HookError::Validation(err)) => {
            assert_eq!(
                err.status_code, status_code,
                "Expected status {}, got {}",
                status_code, err.status_code
            );
            err
        }
    }
}

/// Asserts that a hook failed with a schema fault.
pub fn assert_schema_fault(result: Result<(), HookError>) -> anyhow::Error {
    match result {
        Err(HookError::Schema(fault)) => fault,
        other => panic!("Expected schema fault, got {other:?}"),
    }
}

/// Asserts that every part of `after` equals the same part of `before`.
pub fn assert_untouched(before: &Request, after: &Request) {
    for part in Part::ALL {
        assert_eq!(
            before.field(part),
            after.field(part),
            "Expected {part} to be unchanged"
        );
    }
}
