//! Schema adapter over serde types.
//!
//! Validation is deserialization into `T`; the normalized output is `T`
//! serialized back to JSON. Serde attributes carry the schema semantics:
//! `#[serde(default)]` fills missing fields, `deny_unknown_fields` makes an
//! object strict.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::marker::PhantomData;

use super::{Issue, StandardSchema, Validation, ValidationResult};

/// A schema backed by a serde type.
#[derive(Debug)]
pub struct SerdeSchema<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> SerdeSchema<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates a new serde schema for `T`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Deserializes `input` into `T`, reporting a failure as a single issue.
    pub fn parse(&self, input: &Value) -> Result<T, Issue> {
        T::deserialize(input).map_err(|e| Issue::new(e.to_string()))
    }
}

impl<T> Default for SerdeSchema<T>
where
    T: Serialize + DeserializeOwned,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> StandardSchema for SerdeSchema<T>
where
    T: Serialize + DeserializeOwned,
{
    fn vendor(&self) -> &str {
        "serde"
    }

    fn validate<'a>(&'a self, input: &'a Value) -> Validation<'a> {
        let parsed = match self.parse(input) {
            Ok(parsed) => parsed,
            Err(issue) => return Validation::ready(ValidationResult::failure(vec![issue])),
        };

        match serde_json::to_value(parsed) {
            Ok(value) => Validation::ready(ValidationResult::success(value)),
            Err(e) => Validation::fault(anyhow::Error::new(e).context("Serialization error")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize)]
    struct WithDefault {
        #[serde(default = "exists")]
        field: String,
    }

    fn exists() -> String {
        "exists".to_string()
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Strict {}

    fn settle(schema: &impl StandardSchema, input: &Value) -> ValidationResult {
        tokio_test::block_on(schema.validate(input).settle()).unwrap()
    }

    #[test]
    fn test_defaults_are_applied() {
        let schema = SerdeSchema::<WithDefault>::new();
        assert_eq!(
            settle(&schema, &json!({})),
            ValidationResult::success(json!({"field": "exists"}))
        );
    }

    #[test]
    fn test_type_mismatch_reports_issue() {
        let schema = SerdeSchema::<String>::new();
        let result = settle(&schema, &json!(1234));

        let issues = result.issues().unwrap();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].message.contains("expected a string"));
    }

    #[test]
    fn test_strict_object_rejects_unknown_fields() {
        let schema = SerdeSchema::<Strict>::new();
        assert!(settle(&schema, &json!({"hi": "hi"})).is_failure());
        assert!(!settle(&schema, &json!({})).is_failure());
    }

    #[test]
    fn test_vendor() {
        assert_eq!(SerdeSchema::<String>::new().vendor(), "serde");
    }
}
