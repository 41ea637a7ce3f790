//! The per-component render context.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use super::hooks::{AuxiliaryHook, BaseHook};
use super::sections::{Section, render_secret};
use super::utils::struct_marshal;
use super::{Auxiliary, ContextError, RequiredSecret};
use crate::config::ContextData;
use crate::constants::{CONTEXT_BLOCK, LABEL_COMPONENT};
use crate::core::ExecutionContext;
use crate::model::{Instance, Value, ValueMap};

/// One injected config map, encoded under the `config` field.
pub type ConfigEntry = IndexMap<String, String>;

/// Render-time context of one component.
///
/// Created once per component render from a [`ContextData`] bundle, mutated
/// by the render pipeline, then serialized with
/// [`base_context_file`](Self::base_context_file) or
/// [`extended_context_file`](Self::extended_context_file) for the template
/// evaluator.
///
/// A context is owned by a single render task; it performs no locking.
pub struct RenderContext {
    name: String,
    namespace: String,
    workflow_name: String,
    publish_version: String,

    configs: Vec<ConfigEntry>,
    base: Option<Arc<dyn Instance>>,
    auxiliaries: Vec<Auxiliary>,
    parameters: ValueMap,
    output_secret_name: String,
    required_secrets: Vec<RequiredSecret>,
    data: Option<ValueMap>,

    base_hooks: Vec<Arc<dyn BaseHook>>,
    auxiliary_hooks: Vec<Arc<dyn AuxiliaryHook>>,

    execution: Option<ExecutionContext>,
}

impl fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderContext")
            .field("name", &self.name)
            .field("namespace", &self.namespace)
            .field("workflow_name", &self.workflow_name)
            .field("publish_version", &self.publish_version)
            .field("configs", &self.configs)
            .field("base", &self.base)
            .field("auxiliaries", &self.auxiliaries)
            .field("parameters", &self.parameters)
            .field("output_secret_name", &self.output_secret_name)
            .field("required_secrets", &self.required_secrets)
            .field("data", &self.data)
            .field("base_hooks", &format!("<{} hooks>", self.base_hooks.len()))
            .field("auxiliary_hooks", &format!("<{} hooks>", self.auxiliary_hooks.len()))
            .field("execution", &self.execution)
            .finish()
    }
}

impl RenderContext {
    /// Build a context from its identity, execution context and hooks.
    ///
    /// Every other field starts empty.
    pub fn new(data: ContextData) -> Self {
        let ContextData {
            identity,
            execution,
            base_hooks,
            auxiliary_hooks,
        } = data;

        Self {
            name: identity.name,
            namespace: identity.namespace,
            workflow_name: identity.workflow_name,
            publish_version: identity.publish_version,
            configs: Vec::new(),
            base: None,
            auxiliaries: Vec::new(),
            parameters: ValueMap::new(),
            output_secret_name: String::new(),
            required_secrets: Vec::new(),
            data: None,
            base_hooks,
            auxiliary_hooks,
            execution,
        }
    }

    /// Component name, also used as the component label value.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace of the application.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name of the workflow driving the render.
    pub fn workflow_name(&self) -> &str {
        &self.workflow_name
    }

    /// Publish version of the application revision.
    pub fn publish_version(&self) -> &str {
        &self.publish_version
    }

    /// Replace the component parameters wholesale.
    pub fn set_parameters(&mut self, params: ValueMap) {
        self.parameters = params;
    }

    /// Current component parameters.
    pub fn parameters(&self) -> &ValueMap {
        &self.parameters
    }

    /// Set the primary rendered object.
    ///
    /// Every base hook runs first, in registration order. If one fails the
    /// current base is left as it was and the hook's error is returned.
    pub fn set_base(&mut self, base: Arc<dyn Instance>) -> Result<(), ContextError> {
        for hook in &self.base_hooks {
            hook.exec(self, base.as_ref()).map_err(ContextError::BaseHookRejected)?;
        }
        debug!(component = %self.name, "Set base into render context");
        self.base = Some(base);
        Ok(())
    }

    /// Append a batch of auxiliary objects.
    ///
    /// Auxiliary hooks see the whole batch before anything is appended; a
    /// failing hook leaves the existing auxiliaries untouched.
    pub fn append_auxiliaries(&mut self, auxiliaries: Vec<Auxiliary>) -> Result<(), ContextError> {
        for hook in &self.auxiliary_hooks {
            hook.exec(self, &auxiliaries).map_err(ContextError::AuxiliaryHookRejected)?;
        }
        debug!(
            component = %self.name,
            count = auxiliaries.len(),
            "Appended auxiliaries into render context"
        );
        self.auxiliaries.extend(auxiliaries);
        Ok(())
    }

    /// The base instance (if set) and all auxiliaries in append order.
    pub fn output(&self) -> (Option<&Arc<dyn Instance>>, &[Auxiliary]) {
        (self.base.as_ref(), &self.auxiliaries)
    }

    /// Inject one config map.
    pub fn push_config(&mut self, config: ConfigEntry) {
        self.configs.push(config);
    }

    /// Injected config maps in insertion order.
    pub fn configs(&self) -> &[ConfigEntry] {
        &self.configs
    }

    /// Record secret information of cloud resource components.
    ///
    /// An empty `output_secret_name` keeps the current name. `None` keeps the
    /// current required secrets, while `Some(vec![])` clears them.
    pub fn insert_secrets(
        &mut self,
        output_secret_name: &str,
        required_secrets: Option<Vec<RequiredSecret>>,
    ) {
        if !output_secret_name.is_empty() {
            self.output_secret_name = output_secret_name.to_string();
        }
        if let Some(required_secrets) = required_secrets {
            self.required_secrets = required_secrets;
        }
    }

    /// Name of the secret this component writes; empty when unset.
    pub fn output_secret_name(&self) -> &str {
        &self.output_secret_name
    }

    /// Secrets from other components this component reads.
    pub fn required_secrets(&self) -> &[RequiredSecret] {
        &self.required_secrets
    }

    /// Store extension data under `key`, replacing only that key.
    pub fn push_data(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.data.get_or_insert_with(ValueMap::new).insert(key.into(), value.into());
    }

    /// Extension data, or `None` until the first [`push_data`](Self::push_data).
    pub fn data(&self) -> Option<&ValueMap> {
        self.data.as_ref()
    }

    /// Labels identifying objects rendered for this component.
    pub fn base_context_labels(&self) -> BTreeMap<String, String> {
        BTreeMap::from([(LABEL_COMPONENT.to_string(), self.name.clone())])
    }

    /// The execution context, or a background context when none was set.
    pub fn execution_context(&self) -> ExecutionContext {
        self.execution.clone().unwrap_or_else(ExecutionContext::background)
    }

    /// Replace the execution context handed to hooks.
    pub fn set_execution_context(&mut self, execution: ExecutionContext) {
        self.execution = Some(execution);
    }

    /// Serialize the context as a `context: {...}` block.
    ///
    /// Sections are emitted in a fixed order and skipped when empty. Any
    /// encoding failure aborts the call without returning partial text.
    pub fn base_context_file(&self) -> Result<String, ContextError> {
        let mut body = String::new();
        for section in Section::ORDER {
            if let Some(fragment) = section.render(self)? {
                trace!(section = section.label(), "Emitting context section");
                body.push_str(&fragment);
            }
        }

        let file = format!("{CONTEXT_BLOCK}: {}", struct_marshal(&body));
        debug!(component = %self.name, bytes = file.len(), "Built base context file");
        Ok(file)
    }

    /// The base context file followed by every required secret repeated as
    /// a bare top-level field.
    ///
    /// Without required secrets this equals [`base_context_file`](Self::base_context_file).
    pub fn extended_context_file(&self) -> Result<String, ContextError> {
        let context = self.base_context_file().map_err(|source| ContextError::Conversion {
            source: Box::new(source),
        })?;

        let mut bare = String::new();
        for secret in &self.required_secrets {
            let line = render_secret(secret).map_err(|source| ContextError::SecretConversion {
                payload: secret
                    .data
                    .as_ref()
                    .map_or_else(|| "null".to_string(), |data| format!("{data:?}")),
                source: Box::new(source),
            })?;
            bare.push_str(&line);
        }

        if bare.is_empty() {
            return Ok(context);
        }
        Ok(format!("{context}\n{bare}"))
    }
}
