//! Construction inputs for a render context.
//!
//! A render context is built from a [`ContextData`] bundle: the component
//! identity plus the execution context and the ordered hook lists. The
//! identity part is plain data and can be authored as TOML:
//!
//! ```toml
//! name = "web"
//! namespace = "default"
//! workflow_name = "deploy"
//! publish_version = "v1"
//! ```
//!
//! Only `name` is required; the other fields default to empty strings.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::core::ExecutionContext;
use crate::process::{AuxiliaryHook, BaseHook};

/// Identity of the component being rendered.
///
/// These values are fixed for the lifetime of a render context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContextIdentity {
    /// Component name within the application.
    pub name: String,
    /// Namespace of the application.
    #[serde(default)]
    pub namespace: String,
    /// Name of the workflow driving the render.
    #[serde(default)]
    pub workflow_name: String,
    /// Publish version of the application revision.
    #[serde(default)]
    pub publish_version: String,
}

impl ContextIdentity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    #[must_use]
    pub fn with_workflow_name(mut self, workflow_name: impl Into<String>) -> Self {
        self.workflow_name = workflow_name.into();
        self
    }

    #[must_use]
    pub fn with_publish_version(mut self, publish_version: impl Into<String>) -> Self {
        self.publish_version = publish_version.into();
        self
    }

    /// Parse an identity from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or `name` is missing.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse context identity")
    }

    /// Load an identity from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read context identity from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse context identity from {}", path.display()))
    }
}

/// Everything needed to construct a [`RenderContext`](crate::process::RenderContext).
#[derive(Default)]
pub struct ContextData {
    pub identity: ContextIdentity,
    /// Execution context handed to hooks; a background context is used when unset.
    pub execution: Option<ExecutionContext>,
    /// Hooks run, in order, before the base is set.
    pub base_hooks: Vec<Arc<dyn BaseHook>>,
    /// Hooks run, in order, before auxiliaries are appended.
    pub auxiliary_hooks: Vec<Arc<dyn AuxiliaryHook>>,
}

impl fmt::Debug for ContextData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContextData")
            .field("identity", &self.identity)
            .field("execution", &self.execution)
            .field("base_hooks", &self.base_hooks.len())
            .field("auxiliary_hooks", &self.auxiliary_hooks.len())
            .finish()
    }
}

impl ContextData {
    pub fn new(identity: ContextIdentity) -> Self {
        Self {
            identity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_execution_context(mut self, execution: ExecutionContext) -> Self {
        self.execution = Some(execution);
        self
    }

    #[must_use]
    pub fn with_base_hook(mut self, hook: Arc<dyn BaseHook>) -> Self {
        self.base_hooks.push(hook);
        self
    }

    #[must_use]
    pub fn with_auxiliary_hook(mut self, hook: Arc<dyn AuxiliaryHook>) -> Self {
        self.auxiliary_hooks.push(hook);
        self
    }
}
