//! Render context assembly and serialization.
//!
//! A [`RenderContext`] collects everything a definition template can read
//! while one component is rendered: the component identity, the primary
//! rendered object, auxiliary objects, parameters, secret references and
//! extension data. It then serializes all of it into a single `context`
//! block for the template evaluator.
//!
//! # Produced Text
//!
//! ```text
//! context: {name: "web"
//! namespace: "default"
//! workflowName: "deploy"
//! publishVersion: "v1"
//! output: {kind: "Deployment"}
//! outputs: {"svc": {kind: "Service"}}
//! config: [{"k":"v"}]
//! dbConn:{"host":"db.local"}
//! parameter: {"image":"nginx"}
//! outputSecretName:"web-conn"
//!  {"extra":true}}
//! ```
//!
//! Sections without backing state are omitted; identity fields and
//! `parameter` are always present.
//!
//! # Example
//!
//! ```rust,no_run
//! use render_context::config::{ContextData, ContextIdentity};
//! use render_context::model::TextInstance;
//! use render_context::process::{Auxiliary, RenderContext};
//! use std::sync::Arc;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut ctx = RenderContext::new(ContextData::new(ContextIdentity::new("web")));
//! ctx.set_base(Arc::new(TextInstance::new("kind: \"Deployment\"")))?;
//! ctx.append_auxiliaries(vec![Auxiliary::extra(
//!     Arc::new(TextInstance::new("kind: \"Service\"")),
//!     "svc",
//! )])?;
//! ctx.push_data("replicas", 3);
//!
//! let text = ctx.base_context_file()?;
//! assert!(text.starts_with("context: {name: \"web\""));
//! # Ok(())
//! # }
//! ```

mod auxiliary;
mod context;
mod error;
mod hooks;
mod sections;
mod utils;

pub use auxiliary::{Auxiliary, RequiredSecret};
pub use context::{ConfigEntry, RenderContext};
pub use error::ContextError;
pub use hooks::{AuxiliaryHook, BaseHook, auxiliary_hook, base_hook};
pub use utils::struct_marshal;
