//! Errors raised while assembling or serializing a render context.

use thiserror::Error;

/// Failures of [`RenderContext`](super::RenderContext) operations.
///
/// Hook rejections leave the context untouched. Encoding failures abort the
/// whole serialization; no partial text is ever returned.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A base hook vetoed [`set_base`](super::RenderContext::set_base).
    #[error("cannot set base into context: {0:#}")]
    BaseHookRejected(#[source] anyhow::Error),

    /// An auxiliary hook vetoed
    /// [`append_auxiliaries`](super::RenderContext::append_auxiliaries).
    #[error("cannot append auxiliaries into context: {0:#}")]
    AuxiliaryHookRejected(#[source] anyhow::Error),

    /// A section value could not be encoded as JSON.
    #[error("failed to encode {section}: {source}")]
    Encode {
        /// Field the value belongs to (`config`, `parameter`, a secret's
        /// context name, or `data`).
        section: String,
        source: serde_json::Error,
    },

    /// The base context file could not be produced for the extended file.
    #[error("failed to convert data to application with marshal err: {source}")]
    Conversion {
        source: Box<ContextError>,
    },

    /// A bare secret line of the extended file could not be produced.
    #[error("failed to convert data {payload} to application with marshal err: {source}")]
    SecretConversion {
        /// Debug rendering of the offending secret payload.
        payload: String,
        source: Box<ContextError>,
    },
}

impl ContextError {
    pub(crate) fn encode(section: impl Into<String>, source: serde_json::Error) -> Self {
        ContextError::Encode {
            section: section.into(),
            source,
        }
    }

    /// True for hook vetoes, as opposed to serialization failures.
    pub fn is_hook_rejection(&self) -> bool {
        matches!(self, ContextError::BaseHookRejected(_) | ContextError::AuxiliaryHookRejected(_))
    }
}
