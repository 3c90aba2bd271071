//! Closure-backed schemas.

use super::{StandardSchema, Validation, ValidationResult};
use serde_json::Value;

/// A schema defined by a synchronous validation closure.
pub struct FnSchema<F> {
    vendor: String,
    validate: F,
}

impl<F> FnSchema<F>
where
    F: Fn(&Value) -> ValidationResult + Send + Sync,
{
    /// Creates a schema from a validation closure.
    #[must_use]
    pub fn new(validate: F) -> Self {
        Self {
            vendor: "custom".to_string(),
            validate,
        }
    }

    /// Sets the vendor name reported in logs.
    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.vendor = vendor.into();
        self
    }
}

impl<F> StandardSchema for FnSchema<F>
where
    F: Fn(&Value) -> ValidationResult + Send + Sync,
{
    fn vendor(&self) -> &str {
        &self.vendor
    }

    fn validate<'a>(&'a self, input: &'a Value) -> Validation<'a> {
        Validation::ready((self.validate)(input))
    }
}

impl<F> std::fmt::Debug for FnSchema<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSchema").field("vendor", &self.vendor).finish_non_exhaustive()
    }
}
