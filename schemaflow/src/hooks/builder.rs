//! Builds validation hooks from schema bindings.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use super::part::PartValidator;
use super::{Hook, Middleware, Phase};
use crate::config::{ModifyOptions, ValidatorOptions};
use crate::errors::HookError;
use crate::request::{Part, Request};
use crate::schema::{FailureResult, StandardSchema};

/// Schemas and options for a validator.
#[derive(Clone, Default)]
pub struct SchemaValidatorConfig {
    /// Schema for the incoming event.
    pub event_schema: Option<Arc<dyn StandardSchema>>,
    /// Schema for the execution context.
    pub context_schema: Option<Arc<dyn StandardSchema>>,
    /// Schema for the outgoing response.
    pub response_schema: Option<Arc<dyn StandardSchema>>,
    /// Modify policy and error formatting.
    pub options: ValidatorOptions,
}

impl SchemaValidatorConfig {
    /// Creates an empty config.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event schema.
    #[must_use]
    pub fn with_event_schema(mut self, schema: impl StandardSchema + 'static) -> Self {
        self.event_schema = Some(Arc::new(schema));
        self
    }

    /// Sets the context schema.
    #[must_use]
    pub fn with_context_schema(mut self, schema: impl StandardSchema + 'static) -> Self {
        self.context_schema = Some(Arc::new(schema));
        self
    }

    /// Sets the response schema.
    #[must_use]
    pub fn with_response_schema(mut self, schema: impl StandardSchema + 'static) -> Self {
        self.response_schema = Some(Arc::new(schema));
        self
    }

    /// Replaces all options.
    #[must_use]
    pub fn with_options(mut self, options: ValidatorOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the modify overrides.
    #[must_use]
    pub fn with_modify(mut self, modify: ModifyOptions) -> Self {
        self.options.modify = modify;
        self
    }

    /// Sets the error formatter.
    #[must_use]
    pub fn with_error_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&FailureResult) -> String + Send + Sync + 'static,
    {
        self.options.error_formatter = Some(Arc::new(formatter));
        self
    }

    /// Builds the hooks.
    ///
    /// `before` is present only if an event or context schema is set, and
    /// `after` only if a response schema is set.
    #[must_use]
    pub fn build(self) -> Middleware {
        let policy = self.options.modify_policy();
        let formatter = self.options.error_formatter;

        let before: Option<Arc<dyn Hook>> =
            if self.event_schema.is_some() || self.context_schema.is_some() {
                Some(Arc::new(BeforeHook {
                    event: PartValidator::new(
                        Part::Event,
                        self.event_schema,
                        policy,
                        formatter.clone(),
                    ),
                    context: PartValidator::new(
                        Part::Context,
                        self.context_schema,
                        policy,
                        formatter.clone(),
                    ),
                }))
            } else {
                None
            };

        let after: Option<Arc<dyn Hook>> = self.response_schema.map(|schema| {
            Arc::new(AfterHook {
                response: PartValidator::new(Part::Response, Some(schema), policy, formatter),
            }) as Arc<dyn Hook>
        });

        Middleware::new(before, after)
    }
}

impl fmt::Debug for SchemaValidatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemaValidatorConfig")
            .field("event_schema", &self.event_schema.as_ref().map(|s| s.vendor()))
            .field("context_schema", &self.context_schema.as_ref().map(|s| s.vendor()))
            .field("response_schema", &self.response_schema.as_ref().map(|s| s.vendor()))
            .field("options", &self.options)
            .finish()
    }
}

/// Validates the event, then the context. Stops at the first failure.
struct BeforeHook {
    event: PartValidator,
    context: PartValidator,
}

#[async_trait]
impl Hook for BeforeHook {
    fn phase(&self) -> Phase {
        Phase::Before
    }

    async fn call(&self, request: &mut Request) -> Result<(), HookError> {
        self.event.run(request).await?;
        self.context.run(request).await
    }
}

/// Validates the response.
struct AfterHook {
    response: PartValidator,
}

#[async_trait]
impl Hook for AfterHook {
    fn phase(&self) -> Phase {
        Phase::After
    }

    async fn call(&self, request: &mut Request) -> Result<(), HookError> {
        self.response.run(request).await
    }
}
