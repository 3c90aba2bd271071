//! Validation of a single request part.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::{ErrorFormatter, ModifyPolicy};
use crate::errors::{map_validation_error, HookError};
use crate::request::{Part, Request};
use crate::schema::{StandardSchema, ValidationResult};

/// Validates one field of the request against its schema.
///
/// Without a schema the validator does nothing and never touches the request.
pub(crate) struct PartValidator {
    part: Part,
    schema: Option<Arc<dyn StandardSchema>>,
    replace: bool,
    formatter: Option<ErrorFormatter>,
}

impl PartValidator {
    pub(crate) fn new(
        part: Part,
        schema: Option<Arc<dyn StandardSchema>>,
        policy: ModifyPolicy,
        formatter: Option<ErrorFormatter>,
    ) -> Self {
        Self {
            part,
            schema,
            replace: policy.replaces(part),
            formatter,
        }
    }

    pub(crate) async fn run(&self, request: &mut Request) -> Result<(), HookError> {
        let Some(schema) = self.schema.as_ref() else {
            return Ok(());
        };

        let field = request.field_mut(self.part);
        debug!(part = %self.part, vendor = schema.vendor(), "Validating request part");

        let outcome = schema.validate(&*field).settle().await.map_err(|fault| {
            warn!(
                part = %self.part,
                vendor = schema.vendor(),
                error = %fault,
                "Schema failed while validating"
            );
            HookError::Schema(fault)
        })?;

        match outcome {
            ValidationResult::Failure(failure) => {
                let err = map_validation_error(
                    self.part.status_code(),
                    self.part.label(),
                    &failure,
                    self.formatter.as_ref(),
                );
                if err.expose() {
                    debug!(
                        part = %self.part,
                        status_code = err.status_code,
                        issues = failure.issues.len(),
                        "Request part failed validation"
                    );
                } else {
                    warn!(
                        part = %self.part,
                        status_code = err.status_code,
                        issues = failure.issues.len(),
                        "Request part failed validation"
                    );
                }
                Err(err.into())
            }
            ValidationResult::Success { value } => {
                if self.replace {
                    *field = value;
                    debug!(part = %self.part, "Replaced request part with validated output");
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FnSchema, Issue};
    use serde_json::{json, Value};

    fn validator(part: Part, replace: bool) -> PartValidator {
        let schema = FnSchema::new(|_: &Value| ValidationResult::success(json!("normalized")));
        let policy = ModifyPolicy {
            event: replace,
            context: replace,
            response: replace,
        };
        PartValidator::new(part, Some(Arc::new(schema)), policy, None)
    }

    #[tokio::test]
    async fn test_no_schema_is_noop() {
        let validator = PartValidator::new(Part::Event, None, ModifyPolicy::default(), None);
        let mut request = Request::new(json!({"a": 1}), json!(null));

        validator.run(&mut request).await.unwrap();
        assert_eq!(request.event, json!({"a": 1}));
    }

    #[tokio::test]
    async fn test_replaces_only_its_own_part() {
        let mut request = Request::new(json!(1), json!(2)).with_response(json!(3));
        validator(Part::Context, true).run(&mut request).await.unwrap();

        assert_eq!(request.event, json!(1));
        assert_eq!(request.context, json!("normalized"));
        assert_eq!(request.response, json!(3));
    }

    #[tokio::test]
    async fn test_keeps_field_when_replace_disabled() {
        let mut request = Request::new(json!(1), json!(2)).with_response(json!(3));
        validator(Part::Response, false).run(&mut request).await.unwrap();

        assert_eq!(request.response, json!(3));
    }

    #[tokio::test]
    async fn test_failure_uses_part_status() {
        let schema = FnSchema::new(|_: &Value| ValidationResult::failure(vec![Issue::new("nope")]));
        let validator =
            PartValidator::new(Part::Response, Some(Arc::new(schema)), ModifyPolicy::default(), None);
        let mut request = Request::default();

        let err = validator.run(&mut request).await.unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }
}
