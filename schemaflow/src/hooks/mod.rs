//! Lifecycle hooks that validate requests against schemas.
//!
//! [`SchemaValidatorConfig::build`] produces a [`Middleware`] holding at most
//! two hooks. A hook the configuration does not need is left out entirely, so
//! hosts can test for presence instead of calling a no-op.

mod builder;
mod part;

pub use builder::SchemaValidatorConfig;

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::errors::HookError;
use crate::request::Request;

/// When a hook runs relative to the handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Before the handler executes.
    Before,
    /// After the handler has produced a response.
    After,
}

/// A lifecycle callback invoked by the host pipeline.
#[async_trait]
pub trait Hook: Send + Sync {
    /// The phase this hook belongs to.
    fn phase(&self) -> Phase;

    /// Runs the hook against a request, mutating it in place.
    async fn call(&self, request: &mut Request) -> Result<(), HookError>;
}

/// The hooks produced by a validator.
#[derive(Clone, Default)]
pub struct Middleware {
    before: Option<Arc<dyn Hook>>,
    after: Option<Arc<dyn Hook>>,
}

impl Middleware {
    /// Creates a middleware from optional hooks.
    #[must_use]
    pub fn new(before: Option<Arc<dyn Hook>>, after: Option<Arc<dyn Hook>>) -> Self {
        Self { before, after }
    }

    /// The hook to run before the handler, if any.
    #[must_use]
    pub fn before(&self) -> Option<&Arc<dyn Hook>> {
        self.before.as_ref()
    }

    /// The hook to run after the handler, if any.
    #[must_use]
    pub fn after(&self) -> Option<&Arc<dyn Hook>> {
        self.after.as_ref()
    }

    /// The hook for a phase, if any.
    #[must_use]
    pub fn hook(&self, phase: Phase) -> Option<&Arc<dyn Hook>> {
        match phase {
            Phase::Before => self.before(),
            Phase::After => self.after(),
        }
    }

    /// Returns true if neither hook is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.before.is_none() && self.after.is_none()
    }
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware")
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .finish()
    }
}
