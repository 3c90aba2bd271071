//! The schema capability consumed by the validation hooks.
//!
//! A schema is anything that can look at a JSON value and either hand back a
//! normalized value or report a list of issues. Implementations may answer
//! immediately or return a future; the hooks treat both the same way.

mod fn_schema;
mod issue;
mod serde_schema;

pub use fn_schema::FnSchema;
pub use issue::{Issue, PathSegment};
pub use serde_schema::SerdeSchema;

use futures::future::BoxFuture;
use serde_json::Value;
use std::sync::Arc;

/// An unexpected failure raised by a schema itself, as opposed to reported issues.
pub type SchemaFault = anyhow::Error;

/// What a schema produces once validation has settled.
pub type ValidationOutcome = Result<ValidationResult, SchemaFault>;

/// The issues reported by a failed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct FailureResult {
    /// Issues in the order the schema reported them.
    pub issues: Vec<Issue>,
}

impl FailureResult {
    /// Creates a failure result from a list of issues.
    #[must_use]
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }
}

/// The result of validating a single value.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Validation passed; `value` is the schema's normalized output.
    Success {
        /// The normalized output value.
        value: Value,
    },
    /// Validation failed with one or more issues.
    Failure(FailureResult),
}

impl ValidationResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(value: Value) -> Self {
        Self::Success { value }
    }

    /// Creates a failed result.
    #[must_use]
    pub fn failure(issues: Vec<Issue>) -> Self {
        Self::Failure(FailureResult::new(issues))
    }

    /// Returns true if this result carries issues.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the reported issues, if any.
    #[must_use]
    pub fn issues(&self) -> Option<&[Issue]> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(&failure.issues),
        }
    }
}

/// A validation that is either already settled or still running.
pub enum Validation<'a> {
    /// The schema answered synchronously.
    Ready(ValidationOutcome),
    /// The schema returned a computation that must be awaited.
    Deferred(BoxFuture<'a, ValidationOutcome>),
}

impl<'a> Validation<'a> {
    /// Wraps a synchronous result.
    #[must_use]
    pub fn ready(result: ValidationResult) -> Self {
        Self::Ready(Ok(result))
    }

    /// Wraps a synchronous schema fault.
    #[must_use]
    pub fn fault(fault: SchemaFault) -> Self {
        Self::Ready(Err(fault))
    }

    /// Wraps a future that resolves to the outcome.
    #[must_use]
    pub fn deferred<F>(future: F) -> Self
    where
        F: std::future::Future<Output = ValidationOutcome> + Send + 'a,
    {
        Self::Deferred(Box::pin(future))
    }

    /// Returns true if the outcome has to be awaited.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    /// Waits for the outcome; ready results return without suspending.
    pub async fn settle(self) -> ValidationOutcome {
        match self {
            Self::Ready(outcome) => outcome,
            Self::Deferred(future) => future.await,
        }
    }
}

impl From<ValidationResult> for Validation<'_> {
    fn from(result: ValidationResult) -> Self {
        Self::ready(result)
    }
}

impl std::fmt::Debug for Validation<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ready(outcome) => f.debug_tuple("Ready").field(outcome).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// A standard-shaped schema: one validate operation, sync or deferred.
pub trait StandardSchema: Send + Sync {
    /// Name of the library or adapter behind this schema, used in logs.
    fn vendor(&self) -> &str {
        "custom"
    }

    /// Validates `input`, returning a normalized value or the issues found.
    fn validate<'a>(&'a self, input: &'a Value) -> Validation<'a>;
}

impl<S: StandardSchema + ?Sized> StandardSchema for Arc<S> {
    fn vendor(&self) -> &str {
        (**self).vendor()
    }

    fn validate<'a>(&'a self, input: &'a Value) -> Validation<'a> {
        (**self).validate(input)
    }
}

impl<S: StandardSchema + ?Sized> StandardSchema for Box<S> {
    fn vendor(&self) -> &str {
        (**self).vendor()
    }

    fn validate<'a>(&'a self, input: &'a Value) -> Validation<'a> {
        (**self).validate(input)
    }
}
