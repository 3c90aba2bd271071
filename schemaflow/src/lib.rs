//! # Schemaflow
//!
//! Schema validation hooks for request pipelines.
//!
//! Given optional schemas for a request's event, context and response,
//! schemaflow builds a `before` hook and an `after` hook that validate each
//! part and, depending on the modify policy, replace it with the schema's
//! normalized output.
//!
//! - **Any schema**: anything implementing [`schema::StandardSchema`] can be
//!   plugged in, whether it answers synchronously or with a future
//! - **Only the hooks you need**: a hook with nothing to validate is absent
//! - **Structured errors**: failures carry an HTTP status, a JSON message and
//!   the raw issues
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use schemaflow::prelude::*;
//!
//! let middleware = SchemaValidatorConfig::new()
//!     .with_event_schema(SerdeSchema::<CreateUser>::new())
//!     .with_response_schema(SerdeSchema::<User>::new())
//!     .build();
//!
//! if let Some(before) = middleware.before() {
//!     before.call(&mut request).await?;
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod errors;
pub mod formatters;
pub mod hooks;
pub mod request;
pub mod schema;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ErrorFormatter, ModifyOptions, ModifyPolicy, ValidatorOptions};
    pub use crate::errors::{
        map_validation_error, ErrorCause, HookError, ValidationError, PACKAGE_NAME,
    };
    pub use crate::formatters::{prettify, prettify_issues};
    pub use crate::hooks::{Hook, Middleware, Phase, SchemaValidatorConfig};
    pub use crate::request::{Part, Request};
    pub use crate::schema::{
        FailureResult, FnSchema, Issue, PathSegment, SchemaFault, SerdeSchema, StandardSchema,
        Validation, ValidationOutcome, ValidationResult,
    };
}
