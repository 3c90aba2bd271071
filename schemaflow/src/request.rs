//! The request container passed through the hooks.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// One of the validated subjects of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Part {
    /// The incoming event.
    Event,
    /// The execution context.
    Context,
    /// The outgoing response.
    Response,
}

impl Part {
    /// All parts, in validation order.
    pub const ALL: [Self; 3] = [Self::Event, Self::Context, Self::Response];

    /// Lowercase field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Context => "context",
            Self::Response => "response",
        }
    }

    /// Capitalized label used in error messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Event => "Event",
            Self::Context => "Context",
            Self::Response => "Response",
        }
    }

    /// HTTP status reported when this part fails validation.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::Event | Self::Context => 400,
            Self::Response => 500,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mutable request state owned by the host pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Request {
    /// The incoming event.
    #[serde(default)]
    pub event: Value,
    /// The execution context.
    #[serde(default)]
    pub context: Value,
    /// The handler's response, `Null` until the handler has run.
    #[serde(default)]
    pub response: Value,
}

impl Request {
    /// Creates a request with an event and context and no response yet.
    #[must_use]
    pub fn new(event: Value, context: Value) -> Self {
        Self {
            event,
            context,
            response: Value::Null,
        }
    }

    /// Sets the response.
    #[must_use]
    pub fn with_response(mut self, response: Value) -> Self {
        self.response = response;
        self
    }

    /// Returns the field for a part.
    #[must_use]
    pub fn field(&self, part: Part) -> &Value {
        match part {
            Part::Event => &self.event,
            Part::Context => &self.context,
            Part::Response => &self.response,
        }
    }

    /// Returns the field for a part, mutably.
    pub fn field_mut(&mut self, part: Part) -> &mut Value {
        match part {
            Part::Event => &mut self.event,
            Part::Context => &mut self.context,
            Part::Response => &mut self.response,
        }
    }
}
