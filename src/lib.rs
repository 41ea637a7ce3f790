//! Render-time context for component definition templates.
//!
//! While an application component (a workload and its traits) is rendered,
//! its definition template needs access to facts about the render: the
//! component identity, the objects rendered so far, user parameters, secret
//! data produced by other components, and arbitrary extension data. This
//! crate assembles those facts into a [`process::RenderContext`] and
//! serializes them into a single `context: {...}` block that the template
//! evaluator consumes.
//!
//! # Modules
//!
//! - [`process`] - the render context, its hooks and the serializer
//! - [`model`] - rendered-object capability and the arbitrary value model
//! - [`config`] - identity and construction bundle, TOML loading
//! - [`core`] - execution context (cancellation and deadlines)
//! - [`constants`] - field names of the produced text
//!
//! # Example
//!
//! ```rust,no_run
//! use render_context::config::{ContextData, ContextIdentity};
//! use render_context::model::{TextInstance, Value, ValueMap};
//! use render_context::process::RenderContext;
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let identity = ContextIdentity::new("web")
//!     .with_namespace("default")
//!     .with_workflow_name("deploy")
//!     .with_publish_version("v1");
//!
//! let mut ctx = RenderContext::new(ContextData::new(identity));
//! ctx.set_parameters(ValueMap::from([("image".to_string(), Value::from("nginx"))]));
//! ctx.set_base(Arc::new(TextInstance::new("kind: \"Deployment\"")))?;
//!
//! println!("{}", ctx.extended_context_file()?);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod core;
pub mod model;
pub mod process;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
