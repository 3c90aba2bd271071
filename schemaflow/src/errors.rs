//! Error types for the schemaflow hooks.
//!
//! Validation failures become a [`ValidationError`] carrying an HTTP status,
//! a JSON-wrapped message and the raw issues. Faults raised by a schema
//! itself are passed through untouched as [`HookError::Schema`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::config::ErrorFormatter;
use crate::schema::{FailureResult, Issue, SchemaFault};

/// Identifier placed in the `package` field of every error cause.
pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");

/// The error returned by a hook.
#[derive(Debug, Error)]
pub enum HookError {
    /// A schema reported issues.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A schema failed unexpectedly while validating.
    #[error(transparent)]
    Schema(#[from] SchemaFault),
}

impl HookError {
    /// Returns the HTTP status code for validation failures.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        self.as_validation().map(|e| e.status_code)
    }

    /// Returns the validation error, if this is one.
    #[must_use]
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Schema(_) => None,
        }
    }

    /// Consumes the error, returning the validation error if this is one.
    pub fn into_validation(self) -> Result<ValidationError, Self> {
        match self {
            Self::Validation(e) => Ok(e),
            other @ Self::Schema(_) => Err(other),
        }
    }
}

/// Structured cause attached to a validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorCause {
    /// The package that raised the error.
    pub package: String,
    /// The issues reported by the schema, unmodified.
    pub data: Vec<Issue>,
}

/// Error raised when a part fails validation.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// HTTP status code (400 for event or context, 500 for response).
    pub status_code: u16,
    /// JSON object text of the form `{"message": "..."}`.
    pub message: String,
    /// Originating package and raw issues.
    pub cause: ErrorCause,
    text: String,
}

impl ValidationError {
    /// Creates a validation error from a status code, message text and issues.
    #[must_use]
    pub fn new(status_code: u16, text: impl Into<String>, issues: Vec<Issue>) -> Self {
        let text = text.into();
        let message = serde_json::json!({ "message": text }).to_string();

        Self {
            status_code,
            message,
            cause: ErrorCause {
                package: PACKAGE_NAME.to_string(),
                data: issues,
            },
            text,
        }
    }

    /// Returns the message text before JSON wrapping.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the issues carried in the cause.
    #[must_use]
    pub fn issues(&self) -> &[Issue] {
        &self.cause.data
    }

    /// Returns true if the message is safe to show to the client.
    #[must_use]
    pub fn expose(&self) -> bool {
        self.status_code < 500
    }

    /// Returns the conventional HTTP error name for the status code.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self.status_code {
            400 => "BadRequestError",
            500 => "InternalServerError",
            _ => "HttpError",
        }
    }

    /// Converts to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert("name".to_string(), serde_json::json!(self.name()));
        map.insert("status_code".to_string(), serde_json::json!(self.status_code));
        map.insert("message".to_string(), serde_json::json!(self.message));
        map.insert("expose".to_string(), serde_json::json!(self.expose()));
        map.insert(
            "cause".to_string(),
            serde_json::to_value(&self.cause).unwrap_or(serde_json::Value::Null),
        );
        map
    }
}

/// Returns the message used when no formatter is configured.
#[must_use]
pub fn default_message(label: &str) -> String {
    format!("{label} object failed validation")
}

/// Builds the error raised for a failed part.
///
/// The message text comes from `formatter` when one is supplied, otherwise
/// from [`default_message`]. The status code passes through unchanged.
#[must_use]
pub fn map_validation_error(
    status_code: u16,
    label: &str,
    failure: &FailureResult,
    formatter: Option<&ErrorFormatter>,
) -> ValidationError {
    let text = formatter.map_or_else(|| default_message(label), |formatter| formatter(failure));
    ValidationError::new(status_code, text, failure.issues.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn failure() -> FailureResult {
        FailureResult::new(vec![Issue::new("Expected string").with_path(["name"])])
    }

    #[test]
    fn test_default_message_is_json_wrapped() {
        let err = map_validation_error(400, "Event", &failure(), None);

        assert_eq!(err.status_code, 400);
        assert_eq!(err.text(), "Event object failed validation");
        assert_eq!(
            err.message,
            serde_json::json!({"message": "Event object failed validation"}).to_string()
        );
        assert_eq!(err.to_string(), err.message);
    }

    #[test]
    fn test_formatter_overrides_default() {
        let formatter: ErrorFormatter =
            Arc::new(|failure: &FailureResult| format!("{} issue(s)", failure.issues.len()));
        let err = map_validation_error(500, "Response", &failure(), Some(&formatter));

        assert_eq!(err.status_code, 500);
        assert_eq!(err.message, r#"{"message":"1 issue(s)"}"#);
    }

    #[test]
    fn test_cause_carries_raw_issues() {
        let err = map_validation_error(400, "Context", &failure(), None);

        assert_eq!(err.cause.package, PACKAGE_NAME);
        assert_eq!(err.cause.data, failure().issues);
        assert_eq!(err.issues(), failure().issues.as_slice());
    }

    #[test]
    fn test_expose_and_name() {
        let client = ValidationError::new(400, "x", vec![]);
        let server = ValidationError::new(500, "x", vec![]);

        assert!(client.expose());
        assert!(!server.expose());
        assert_eq!(client.name(), "BadRequestError");
        assert_eq!(server.name(), "InternalServerError");
        assert_eq!(ValidationError::new(422, "x", vec![]).name(), "HttpError");
    }

    #[test]
    fn test_to_dict() {
        let err = map_validation_error(400, "Event", &failure(), None);
        let dict = err.to_dict();

        assert_eq!(dict.get("status_code").unwrap(), 400);
        assert_eq!(dict.get("expose").unwrap(), true);
        assert_eq!(
            dict.get("cause").unwrap(),
            &serde_json::json!({
                "package": PACKAGE_NAME,
                "data": [{"message": "Expected string", "path": ["name"]}],
            })
        );
    }

    #[test]
    fn test_hook_error_accessors() {
        let err = HookError::from(ValidationError::new(400, "x", vec![]));
        assert_eq!(err.status_code(), Some(400));
        assert!(err.into_validation().is_ok());

        let fault = HookError::from(anyhow::anyhow!("schema exploded"));
        assert_eq!(fault.status_code(), None);
        assert_eq!(fault.to_string(), "schema exploded");
        assert!(fault.into_validation().is_err());
    }
}
