//! Schema doubles for testing.

use parking_lot::Mutex;
use serde_json::Value;

use crate::schema::{Issue, StandardSchema, Validation, ValidationResult};

/// A schema that records every input and returns a configurable result.
#[derive(Debug)]
pub struct RecordingSchema {
    result: Mutex<ValidationResult>,
    inputs: Mutex<Vec<Value>>,
}

impl RecordingSchema {
    /// Creates a schema that returns `result` for every input.
    #[must_use]
    pub fn returning(result: ValidationResult) -> Self {
        Self {
            result: Mutex::new(result),
            inputs: Mutex::new(Vec::new()),
        }
    }

    /// Creates a schema that succeeds with `value` for every input.
    #[must_use]
    pub fn succeeding_with(value: Value) -> Self {
        Self::returning(ValidationResult::success(value))
    }

    /// Creates a schema that fails with `issues` for every input.
    #[must_use]
    pub fn failing_with(issues: Vec<Issue>) -> Self {
        Self::returning(ValidationResult::failure(issues))
    }

    /// Sets the result to return from now on.
    pub fn set_result(&self, result: ValidationResult) {
        *self.result.lock() = result;
    }

    /// Returns the number of times the schema was called.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.inputs.lock().len()
    }

    /// Returns the inputs from each call.
    #[must_use]
    pub fn recorded_inputs(&self) -> Vec<Value> {
        self.inputs.lock().clone()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        self.inputs.lock().clear();
    }
}

impl StandardSchema for RecordingSchema {
    fn vendor(&self) -> &str {
        "recording"
    }

    fn validate<'a>(&'a self, input: &'a Value) -> Validation<'a> {
        self.inputs.lock().push(input.clone());
        Validation::ready(self.result.lock().clone())
    }
}

/// Wraps a schema so that every validation answers with a deferred result.
#[derive(Debug)]
pub struct DeferredSchema<S> {
    inner: S,
}

impl<S: StandardSchema> DeferredSchema<S> {
    /// Wraps `inner`.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped schema.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: StandardSchema> StandardSchema for DeferredSchema<S> {
    fn vendor(&self) -> &str {
        self.inner.vendor()
    }

    fn validate<'a>(&'a self, input: &'a Value) -> Validation<'a> {
        Validation::deferred(self.inner.validate(input).settle())
    }
}

/// A schema whose validate operation always fails with a fault.
#[derive(Debug, Clone)]
pub struct FaultySchema {
    message: String,
    deferred: bool,
}

impl FaultySchema {
    /// Creates a schema that faults synchronously.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            deferred: false,
        }
    }

    /// Makes the fault surface from a deferred result instead.
    #[must_use]
    pub fn deferred(mut self) -> Self {
        self.deferred = true;
        self
    }
}

impl StandardSchema for FaultySchema {
    fn vendor(&self) -> &str {
        "faulty"
    }

    fn validate<'a>(&'a self, _input: &'a Value) -> Validation<'a> {
        let fault = anyhow::anyhow!("{}", self.message);
        if self.deferred {
            Validation::deferred(async move { Err(fault) })
        } else {
            Validation::fault(fault)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recording_schema_tracks_inputs() {
        let schema = RecordingSchema::succeeding_with(json!("out"));
        let input = json!({"a": 1});

        let result = tokio_test::block_on(schema.validate(&input).settle()).unwrap();
        assert_eq!(result, ValidationResult::success(json!("out")));
        assert_eq!(schema.call_count(), 1);
        assert_eq!(schema.recorded_inputs(), vec![input]);

        schema.reset();
        assert_eq!(schema.call_count(), 0);
    }

    #[test]
    fn test_deferred_schema_defers() {
        let schema = DeferredSchema::new(RecordingSchema::succeeding_with(json!(1)));
        let input = json!(null);

        let validation = schema.validate(&input);
        assert!(validation.is_deferred());
        assert_eq!(
            tokio_test::block_on(validation.settle()).unwrap(),
            ValidationResult::success(json!(1))
        );
        assert_eq!(schema.inner().call_count(), 1);
    }

    #[test]
    fn test_faulty_schema() {
        let input = json!(null);
        let sync = FaultySchema::new("broken");
        assert!(!sync.validate(&input).is_deferred());

        let deferred = FaultySchema::new("broken").deferred();
        let validation = deferred.validate(&input);
        assert!(validation.is_deferred());
        let err = tokio_test::block_on(validation.settle()).unwrap_err();
        assert_eq!(err.to_string(), "broken");
    }
}
