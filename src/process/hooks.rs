//! Interception points run before the render context commits a mutation.
//!
//! Hooks are registered once, through [`ContextData`](crate::config::ContextData),
//! and run in registration order. The first failing hook aborts the
//! mutation; later hooks are not run.
//!
//! Any closure with the right signature is a hook:
//!
//! ```rust,no_run
//! use render_context::config::{ContextData, ContextIdentity};
//! use render_context::process::{auxiliary_hook, base_hook};
//!
//! let data = ContextData::new(ContextIdentity::new("web"))
//!     .with_base_hook(base_hook(|_ctx, base| {
//!         anyhow::ensure!(!base.to_text().is_empty(), "empty base");
//!         Ok(())
//!     }))
//!     .with_auxiliary_hook(auxiliary_hook(|_ctx, batch| {
//!         anyhow::ensure!(batch.len() <= 8, "too many outputs");
//!         Ok(())
//!     }));
//! ```

use std::sync::Arc;

use anyhow::Result;

use super::{Auxiliary, RenderContext};
use crate::model::Instance;

/// Observes or vetoes the candidate base instance.
pub trait BaseHook: Send + Sync {
    fn exec(&self, ctx: &RenderContext, base: &dyn Instance) -> Result<()>;
}

/// Observes or vetoes an incoming batch of auxiliaries.
///
/// The batch is passed before any of it is appended.
pub trait AuxiliaryHook: Send + Sync {
    fn exec(&self, ctx: &RenderContext, auxiliaries: &[Auxiliary]) -> Result<()>;
}

impl<F> BaseHook for F
where
    F: Fn(&RenderContext, &dyn Instance) -> Result<()> + Send + Sync,
{
    fn exec(&self, ctx: &RenderContext, base: &dyn Instance) -> Result<()> {
        self(ctx, base)
    }
}

impl<F> AuxiliaryHook for F
where
    F: Fn(&RenderContext, &[Auxiliary]) -> Result<()> + Send + Sync,
{
    fn exec(&self, ctx: &RenderContext, auxiliaries: &[Auxiliary]) -> Result<()> {
        self(ctx, auxiliaries)
    }
}

/// Box a closure as a shared [`BaseHook`].
pub fn base_hook<F>(f: F) -> Arc<dyn BaseHook>
where
    F: Fn(&RenderContext, &dyn Instance) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Box a closure as a shared [`AuxiliaryHook`].
pub fn auxiliary_hook<F>(f: F) -> Arc<dyn AuxiliaryHook>
where
    F: Fn(&RenderContext, &[Auxiliary]) -> Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}
