//! Value carriers attached to a render context.

use std::sync::Arc;

use crate::model::{Instance, ValueMap};

/// A secondary object rendered by a definition template.
///
/// Auxiliaries are exposed to templates as `outputs.<name>`; they can be
/// trait objects or extra workload resources.
#[derive(Debug, Clone)]
pub struct Auxiliary {
    pub ins: Arc<dyn Instance>,
    /// Definition type used downstream to resolve the object's CRD.
    ///
    /// Required for trait and main workload objects; extra objects rendered
    /// alongside a workload leave it empty.
    pub kind: String,
    /// Distinguishes several outputs of the same type. Empty for the main
    /// output of that type.
    pub name: String,
}

impl Auxiliary {
    pub fn new(ins: Arc<dyn Instance>, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ins,
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// An extra object without a definition type.
    pub fn extra(ins: Arc<dyn Instance>, name: impl Into<String>) -> Self {
        Self::new(ins, String::new(), name)
    }

    /// Whether this auxiliary carries a definition type.
    pub fn has_kind(&self) -> bool {
        !self.kind.is_empty()
    }
}

/// Secret data generated by another component and required by this one.
///
/// The payload is exposed in the context text under `context_name`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequiredSecret {
    pub namespace: String,
    pub name: String,
    pub context_name: String,
    /// Secret payload; `None` renders as `null`.
    pub data: Option<ValueMap>,
}

impl RequiredSecret {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        context_name: impl Into<String>,
        data: ValueMap,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            context_name: context_name.into(),
            data: Some(data),
        }
    }
}
