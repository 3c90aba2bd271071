//! Fixtures for driving hooks in tests.

use serde_json::Value;

use crate::errors::HookError;
use crate::hooks::{Middleware, Phase, SchemaValidatorConfig};
use crate::request::{Part, Request};
use crate::schema::StandardSchema;

/// Returns the phase whose hook validates `part`.
#[must_use]
pub fn phase_for(part: Part) -> Phase {
    match part {
        Part::Event | Part::Context => Phase::Before,
        Part::Response => Phase::After,
    }
}

/// Creates a request with `value` in `part` and `Null` everywhere else.
#[must_use]
pub fn request_with(part: Part, value: Value) -> Request {
    let mut request = Request::default();
    *request.field_mut(part) = value;
    request
}

/// Adds `schema` to `config` for the given part.
#[must_use]
pub fn with_schema_for(
    config: SchemaValidatorConfig,
    part: Part,
    schema: impl StandardSchema + 'static,
) -> SchemaValidatorConfig {
    match part {
        Part::Event => config.with_event_schema(schema),
        Part::Context => config.with_context_schema(schema),
        Part::Response => config.with_response_schema(schema),
    }
}

/// Invokes the hook that validates `part`.
///
/// # Panics
///
/// Panics if the middleware has no hook for that part's phase.
pub async fn invoke(
    middleware: &Middleware,
    part: Part,
    request: &mut Request,
) -> Result<(), HookError> {
    let phase = phase_for(part);
    let hook = middleware
        .hook(phase)
        .unwrap_or_else(|| panic!("Expected a {phase:?} hook for {part}"));
    hook.call(request).await
}

/// Invokes every hook present on the middleware, `before` first.
///
/// Absent hooks are skipped.
pub async fn run_all(middleware: &Middleware, request: &mut Request) -> Result<(), HookError> {
    if let Some(before) = middleware.before() {
        before.call(request).await?;
    }
    if let Some(after) = middleware.after() {
        after.call(request).await?;
    }
    Ok(())
}
