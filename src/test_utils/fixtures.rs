//! Fixtures for render context tests.

use std::sync::{Arc, Mutex};

use crate::config::{ContextData, ContextIdentity};
use crate::model::{Instance, TextInstance};
use crate::process::{AuxiliaryHook, BaseHook, auxiliary_hook, base_hook};

/// Identity `comp` / `ns` / `wf` / `v1`.
pub fn fixture_identity() -> ContextIdentity {
    ContextIdentity::new("comp")
        .with_namespace("ns")
        .with_workflow_name("wf")
        .with_publish_version("v1")
}

/// Construction bundle for [`fixture_identity`] without hooks.
pub fn fixture_data() -> ContextData {
    ContextData::new(fixture_identity())
}

pub fn text_instance(text: &str) -> Arc<dyn Instance> {
    Arc::new(TextInstance::new(text))
}

/// A base hook that always fails with `message`.
pub fn rejecting_base_hook(message: &'static str) -> Arc<dyn BaseHook> {
    base_hook(move |_, _| Err(anyhow::anyhow!(message)))
}

/// An auxiliary hook that always fails with `message`.
pub fn rejecting_auxiliary_hook(message: &'static str) -> Arc<dyn AuxiliaryHook> {
    auxiliary_hook(move |_, _| Err(anyhow::anyhow!(message)))
}

/// Records hook invocations as `"<label>:<detail>"` entries.
///
/// Base hooks record the candidate's text; auxiliary hooks record the
/// comma-joined names of the incoming batch.
#[derive(Debug, Clone, Default)]
pub struct HookRecorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl HookRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_hook(&self, label: &'static str) -> Arc<dyn BaseHook> {
        let calls = Arc::clone(&self.calls);
        base_hook(move |_, base| {
            calls.lock().unwrap().push(format!("{label}:{}", base.to_text()));
            Ok(())
        })
    }

    pub fn auxiliary_hook(&self, label: &'static str) -> Arc<dyn AuxiliaryHook> {
        let calls = Arc::clone(&self.calls);
        auxiliary_hook(move |_, batch| {
            let names: Vec<&str> = batch.iter().map(|aux| aux.name.as_str()).collect();
            calls.lock().unwrap().push(format!("{label}:{}", names.join(",")));
            Ok(())
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}
