//! Sections of the serialized context block.
//!
//! Each section renders its own fragment, including its trailing separator,
//! or nothing when its backing state is empty. The context file is the
//! concatenation of the fragments in [`Section::ORDER`].

use serde::Serialize;

use super::utils::struct_marshal;
use super::{ContextError, RenderContext, RequiredSecret};
use crate::model::value::to_json_string;
use crate::constants::{
    CONFIG_FIELD, CONTEXT_NAME, CONTEXT_NAMESPACE, CONTEXT_PUBLISH_VERSION, CONTEXT_WORKFLOW_NAME,
    OUTPUT_FIELD, OUTPUT_SECRET_NAME, OUTPUTS_FIELD, PARAMETER_FIELD,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Identity,
    Output,
    Outputs,
    Config,
    RequiredSecrets,
    Parameter,
    OutputSecretName,
    Data,
}

impl Section {
    pub(crate) const ORDER: [Section; 8] = [
        Section::Identity,
        Section::Output,
        Section::Outputs,
        Section::Config,
        Section::RequiredSecrets,
        Section::Parameter,
        Section::OutputSecretName,
        Section::Data,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            Section::Identity => "identity",
            Section::Output => OUTPUT_FIELD,
            Section::Outputs => OUTPUTS_FIELD,
            Section::Config => CONFIG_FIELD,
            Section::RequiredSecrets => "requiredSecrets",
            Section::Parameter => PARAMETER_FIELD,
            Section::OutputSecretName => OUTPUT_SECRET_NAME,
            Section::Data => "data",
        }
    }

    /// Render this section's fragment, or `None` when it is omitted.
    pub(crate) fn render(self, ctx: &RenderContext) -> Result<Option<String>, ContextError> {
        match self {
            Section::Identity => Ok(Some(render_identity(ctx))),
            Section::Output => Ok(ctx
                .output()
                .0
                .map(|base| format!("{OUTPUT_FIELD}: {}\n", struct_marshal(&base.to_text())))),
            Section::Outputs => Ok(render_outputs(ctx)),
            Section::Config => {
                if ctx.configs().is_empty() {
                    return Ok(None);
                }
                let encoded = encode(CONFIG_FIELD, ctx.configs())?;
                Ok(Some(format!("{CONFIG_FIELD}: {encoded}\n")))
            }
            Section::RequiredSecrets => {
                let lines = ctx
                    .required_secrets()
                    .iter()
                    .map(render_secret)
                    .collect::<Result<String, _>>()?;
                Ok((!lines.is_empty()).then_some(lines))
            }
            Section::Parameter => {
                let encoded = encode(PARAMETER_FIELD, ctx.parameters())?;
                Ok(Some(format!("{PARAMETER_FIELD}: {encoded}\n")))
            }
            Section::OutputSecretName => {
                let name = ctx.output_secret_name();
                Ok((!name.is_empty()).then(|| format!("{OUTPUT_SECRET_NAME}:\"{name}\"")))
            }
            Section::Data => match ctx.data() {
                Some(data) => {
                    let encoded = encode("data", data)?;
                    Ok(Some(format!("\n {}", struct_marshal(&encoded))))
                }
                None => Ok(None),
            },
        }
    }
}

fn render_identity(ctx: &RenderContext) -> String {
    format!(
        "{CONTEXT_NAME}: \"{}\"\n{CONTEXT_NAMESPACE}: \"{}\"\n{CONTEXT_WORKFLOW_NAME}: \"{}\"\n{CONTEXT_PUBLISH_VERSION}: \"{}\"\n",
        ctx.name(),
        ctx.namespace(),
        ctx.workflow_name(),
        ctx.publish_version()
    )
}

fn render_outputs(ctx: &RenderContext) -> Option<String> {
    let auxiliaries = ctx.output().1;
    if auxiliaries.is_empty() {
        return None;
    }
    let lines: Vec<String> = auxiliaries
        .iter()
        .map(|aux| format!("\"{}\": {}", aux.name, struct_marshal(&aux.ins.to_text())))
        .collect();
    Some(format!("{OUTPUTS_FIELD}: {{{}}}\n", lines.join("\n")))
}

/// One `<contextName>:<json>` line for a required secret.
pub(crate) fn render_secret(secret: &RequiredSecret) -> Result<String, ContextError> {
    let encoded = encode(&secret.context_name, &secret.data)?;
    Ok(format!("{}:{encoded}\n", secret.context_name))
}

fn encode<T: Serialize + ?Sized>(section: &str, value: &T) -> Result<String, ContextError> {
    to_json_string(value).map_err(|source| ContextError::encode(section, source))
}
