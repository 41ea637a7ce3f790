//! Field names used in the produced context text.
//!
//! The downstream template evaluator addresses context values by these
//! keys (`context.name`, `context.output`, ...). Defining them centrally
//! keeps the serializer and the label helpers in agreement.

/// Key wrapping the whole serialized block.
pub const CONTEXT_BLOCK: &str = "context";

/// Component name field.
pub const CONTEXT_NAME: &str = "name";

/// Namespace of the owning application.
pub const CONTEXT_NAMESPACE: &str = "namespace";

/// Name of the workflow driving the render.
pub const CONTEXT_WORKFLOW_NAME: &str = "workflowName";

/// Publish version of the application revision.
pub const CONTEXT_PUBLISH_VERSION: &str = "publishVersion";

/// Primary rendered object.
pub const OUTPUT_FIELD: &str = "output";

/// Auxiliary rendered objects, keyed by auxiliary name.
pub const OUTPUTS_FIELD: &str = "outputs";

/// Injected config maps.
pub const CONFIG_FIELD: &str = "config";

/// User supplied parameters of the component.
pub const PARAMETER_FIELD: &str = "parameter";

/// Name of the secret generated by the component.
pub const OUTPUT_SECRET_NAME: &str = "outputSecretName";

/// Label key returned by [`crate::process::RenderContext::base_context_labels`].
///
/// Carries the component name, mirroring the application component label.
pub const LABEL_COMPONENT: &str = CONTEXT_NAME;
