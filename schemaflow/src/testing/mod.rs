//! Testing utilities for schemaflow hooks.
//!
//! This module provides:
//! - Schema doubles (recording, deferred, faulty)
//! - Fixtures for building requests and invoking hooks by part
//! - Assertions on hook results

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{assert_schema_fault, assert_untouched, assert_validation_failed};
pub use fixtures::{invoke, phase_for, request_with, run_all, with_schema_for};
pub use mocks::{DeferredSchema, FaultySchema, RecordingSchema};
