//! Validator configuration: modify policy and error formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::request::Part;
use crate::schema::FailureResult;

/// Turns a failed validation into the message text of the raised error.
pub type ErrorFormatter = Arc<dyn Fn(&FailureResult) -> String + Send + Sync>;

/// Partial override of the modify policy; unset fields keep their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyOptions {
    /// Replace the event with the validated output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event: Option<bool>,
    /// Replace the context with the validated output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<bool>,
    /// Replace the response with the validated output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<bool>,
}

impl ModifyOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets every part to the same value.
    #[must_use]
    pub fn all(enabled: bool) -> Self {
        Self {
            event: Some(enabled),
            context: Some(enabled),
            response: Some(enabled),
        }
    }

    /// Sets the event override.
    #[must_use]
    pub fn with_event(mut self, enabled: bool) -> Self {
        self.event = Some(enabled);
        self
    }

    /// Sets the context override.
    #[must_use]
    pub fn with_context(mut self, enabled: bool) -> Self {
        self.context = Some(enabled);
        self
    }

    /// Sets the response override.
    #[must_use]
    pub fn with_response(mut self, enabled: bool) -> Self {
        self.response = Some(enabled);
        self
    }
}

/// Resolved per-part decision on whether validated output replaces the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifyPolicy {
    /// Replace the event.
    pub event: bool,
    /// Replace the context.
    pub context: bool,
    /// Replace the response.
    pub response: bool,
}

impl Default for ModifyPolicy {
    fn default() -> Self {
        Self {
            event: true,
            context: false,
            response: false,
        }
    }
}

impl ModifyPolicy {
    /// Overlays `options` on this policy field by field.
    #[must_use]
    pub fn merge(self, options: ModifyOptions) -> Self {
        Self {
            event: options.event.unwrap_or(self.event),
            context: options.context.unwrap_or(self.context),
            response: options.response.unwrap_or(self.response),
        }
    }

    /// Returns whether validated output should replace `part`.
    #[must_use]
    pub const fn replaces(&self, part: Part) -> bool {
        match part {
            Part::Event => self.event,
            Part::Context => self.context,
            Part::Response => self.response,
        }
    }
}

impl From<ModifyOptions> for ModifyPolicy {
    fn from(options: ModifyOptions) -> Self {
        Self::default().merge(options)
    }
}

/// Options shared by all hooks built from one validator.
#[derive(Clone, Default)]
pub struct ValidatorOptions {
    /// Partial modify policy, merged over the defaults at build time.
    pub modify: ModifyOptions,
    /// Custom error message formatter.
    pub error_formatter: Option<ErrorFormatter>,
}

impl ValidatorOptions {
    /// Creates default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the modify overrides.
    #[must_use]
    pub fn with_modify(mut self, modify: ModifyOptions) -> Self {
        self.modify = modify;
        self
    }

    /// Sets the error formatter.
    #[must_use]
    pub fn with_error_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&FailureResult) -> String + Send + Sync + 'static,
    {
        self.error_formatter = Some(Arc::new(formatter));
        self
    }

    /// Returns the resolved modify policy.
    #[must_use]
    pub fn modify_policy(&self) -> ModifyPolicy {
        ModifyPolicy::from(self.modify)
    }
}

impl fmt::Debug for ValidatorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorOptions")
            .field("modify", &self.modify)
            .field("error_formatter", &self.error_formatter.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_policy() {
        let policy = ModifyPolicy::default();
        assert!(policy.replaces(Part::Event));
        assert!(!policy.replaces(Part::Context));
        assert!(!policy.replaces(Part::Response));
    }

    #[test]
    fn test_merge_keeps_unset_defaults() {
        let policy = ModifyPolicy::from(ModifyOptions::new().with_response(true));
        assert_eq!(
            policy,
            ModifyPolicy {
                event: true,
                context: false,
                response: true,
            }
        );
    }

    #[test]
    fn test_merge_can_disable_event() {
        let policy = ModifyPolicy::from(ModifyOptions::new().with_event(false));
        assert!(!policy.replaces(Part::Event));
    }

    #[test]
    fn test_all() {
        let policy = ModifyPolicy::from(ModifyOptions::all(true));
        assert!(Part::ALL.iter().all(|part| policy.replaces(*part)));
    }

    #[test]
    fn test_options_from_json() {
        let options: ModifyOptions = serde_json::from_value(json!({"context": true})).unwrap();
        assert_eq!(options, ModifyOptions::new().with_context(true));
        assert_eq!(serde_json::to_value(options).unwrap(), json!({"context": true}));
    }

    #[test]
    fn test_validator_options_debug_hides_formatter() {
        let options = ValidatorOptions::new().with_error_formatter(|_: &FailureResult| "x".to_string());
        let debug = format!("{options:?}");
        assert!(debug.contains("error_formatter: true"));
        assert_eq!(options.modify_policy(), ModifyPolicy::default());
    }
}
