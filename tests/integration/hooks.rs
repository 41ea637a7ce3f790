//! Hook pipeline behavior.

use std::sync::Arc;

use anyhow::Result;
use render_context::model::Instance;
use render_context::process::{Auxiliary, BaseHook, ContextError, RenderContext};
use render_context::test_utils::{
    HookRecorder, fixture_data, rejecting_auxiliary_hook, rejecting_base_hook, text_instance,
};

/// Rejects bases whose text does not mention a kind.
struct RequireKind;

impl BaseHook for RequireKind {
    fn exec(&self, _ctx: &RenderContext, base: &dyn Instance) -> Result<()> {
        anyhow::ensure!(base.to_text().contains("kind:"), "base has no kind");
        Ok(())
    }
}

fn names(ctx: &RenderContext) -> Vec<String> {
    ctx.output().1.iter().map(|aux| aux.name.clone()).collect()
}

#[test]
fn test_hooks_run_in_registration_order() -> Result<()> {
    let recorder = HookRecorder::new();
    let data = fixture_data()
        .with_base_hook(recorder.base_hook("first"))
        .with_base_hook(recorder.base_hook("second"))
        .with_auxiliary_hook(recorder.auxiliary_hook("aux"));

    let mut ctx = RenderContext::new(data);
    ctx.set_base(text_instance("kind: \"Deployment\""))?;
    ctx.append_auxiliaries(vec![
        Auxiliary::extra(text_instance("a: 1"), "a"),
        Auxiliary::extra(text_instance("b: 1"), "b"),
    ])?;

    assert_eq!(
        recorder.calls(),
        vec!["first:kind: \"Deployment\"", "second:kind: \"Deployment\"", "aux:a,b"]
    );
    Ok(())
}

#[test]
fn test_failing_hook_short_circuits() {
    let recorder = HookRecorder::new();
    let data = fixture_data()
        .with_base_hook(rejecting_base_hook("quota exceeded"))
        .with_base_hook(recorder.base_hook("after"));

    let mut ctx = RenderContext::new(data);
    let err = ctx.set_base(text_instance("a: 1")).unwrap_err();

    assert!(matches!(err, ContextError::BaseHookRejected(_)));
    assert_eq!(err.to_string(), "cannot set base into context: quota exceeded");
    assert!(recorder.calls().is_empty());
    assert!(ctx.output().0.is_none());
}

#[test]
fn test_trait_hook_vetoes_base() -> Result<()> {
    let data = fixture_data().with_base_hook(Arc::new(RequireKind));
    let mut ctx = RenderContext::new(data);

    ctx.set_base(text_instance("kind: \"Deployment\""))?;
    assert!(ctx.set_base(text_instance("replicas: 2")).is_err());

    let text = ctx.base_context_file()?;
    assert!(text.contains("output: {kind: \"Deployment\"}\n"));
    assert!(!text.contains("replicas"));
    Ok(())
}

#[test]
fn test_appends_concatenate_batches() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());

    ctx.append_auxiliaries(vec![Auxiliary::extra(text_instance("a: 1"), "a")])?;
    ctx.append_auxiliaries(Vec::new())?;
    ctx.append_auxiliaries(vec![
        Auxiliary::extra(text_instance("b: 1"), "b"),
        Auxiliary::extra(text_instance("c: 1"), "c"),
    ])?;

    assert_eq!(names(&ctx), vec!["a", "b", "c"]);
    let text = ctx.base_context_file()?;
    assert!(text.contains("outputs: {\"a\": {a: 1}\n\"b\": {b: 1}\n\"c\": {c: 1}}\n"));
    Ok(())
}

#[test]
fn test_rejected_batch_leaves_auxiliaries() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.append_auxiliaries(vec![Auxiliary::extra(text_instance("a: 1"), "a")])?;

    let mut vetoing =
        RenderContext::new(fixture_data().with_auxiliary_hook(rejecting_auxiliary_hook("denied")));
    let err = vetoing
        .append_auxiliaries(vec![Auxiliary::extra(text_instance("b: 1"), "b")])
        .unwrap_err();

    assert!(err.is_hook_rejection());
    assert_eq!(err.to_string(), "cannot append auxiliaries into context: denied");
    assert!(vetoing.output().1.is_empty());
    assert!(!vetoing.base_context_file()?.contains("outputs"));
    assert_eq!(names(&ctx), vec!["a"]);
    Ok(())
}

#[test]
fn test_hook_reads_context_state() -> Result<()> {
    let data = fixture_data().with_base_hook(render_context::process::base_hook(|ctx, _| {
        anyhow::ensure!(ctx.output().1.is_empty(), "base must precede auxiliaries");
        Ok(())
    }));
    let mut ctx = RenderContext::new(data);

    ctx.set_base(text_instance("a: 1"))?;
    ctx.append_auxiliaries(vec![Auxiliary::extra(text_instance("b: 1"), "b")])?;
    let err = ctx.set_base(text_instance("c: 1")).unwrap_err();

    assert!(err.to_string().contains("base must precede auxiliaries"));
    assert_eq!(ctx.output().0.map(|base| base.to_text()), Some("a: 1".to_string()));
    Ok(())
}
