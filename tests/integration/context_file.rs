//! Serialization of the context block.

use anyhow::Result;
use render_context::model::{Value, ValueMap};
use render_context::process::{Auxiliary, ConfigEntry, ContextError, RenderContext, RequiredSecret};
use render_context::test_utils::{fixture_data, init_test_logging, text_instance};

const IDENTITY: &str =
    "name: \"comp\"\nnamespace: \"ns\"\nworkflowName: \"wf\"\npublishVersion: \"v1\"\n";

fn db_secret() -> RequiredSecret {
    let data = ValueMap::from([("host".to_string(), Value::from("db.local"))]);
    RequiredSecret::new("ns", "db-conn", "dbConn", data)
}

fn fully_populated() -> Result<RenderContext> {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.set_base(text_instance("kind: \"Deployment\""))?;
    ctx.append_auxiliaries(vec![Auxiliary::extra(text_instance("  kind: \"Service\""), "svc")])?;
    ctx.push_config(ConfigEntry::from([("k".to_string(), "v".to_string())]));
    ctx.insert_secrets("web-conn", Some(vec![db_secret()]));
    ctx.set_parameters(ValueMap::from([("image".to_string(), Value::from("nginx"))]));
    ctx.push_data("extra", true);
    Ok(ctx)
}

#[test]
fn test_fresh_context_has_identity_and_parameter_only() -> Result<()> {
    init_test_logging(None);

    let ctx = RenderContext::new(fixture_data());
    let text = ctx.base_context_file()?;

    assert_eq!(text, format!("context: {{{IDENTITY}parameter: {{}}\n}}"));
    assert_eq!(ctx.extended_context_file()?, text);
    Ok(())
}

#[test]
fn test_all_sections_in_order() -> Result<()> {
    init_test_logging(None);

    let ctx = fully_populated()?;
    let expected = format!(
        "context: {{{IDENTITY}\
output: {{kind: \"Deployment\"}}\n\
outputs: {{\"svc\": {{kind: \"Service\"}}}}\n\
config: [{{\"k\":\"v\"}}]\n\
dbConn:{{\"host\":\"db.local\"}}\n\
parameter: {{\"image\":\"nginx\"}}\n\
outputSecretName:\"web-conn\"\n {{\"extra\":true}}}}"
    );

    assert_eq!(ctx.base_context_file()?, expected);
    Ok(())
}

#[test]
fn test_extended_file_repeats_secrets() -> Result<()> {
    let ctx = fully_populated()?;
    let base = ctx.base_context_file()?;
    let extended = ctx.extended_context_file()?;

    assert_eq!(extended, format!("{base}\ndbConn:{{\"host\":\"db.local\"}}\n"));
    assert_eq!(extended.matches("dbConn:").count(), 2);
    Ok(())
}

#[test]
fn test_multiple_secrets_keep_order() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    let second = RequiredSecret::new(
        "ns",
        "cache",
        "cacheConn",
        ValueMap::from([("port".to_string(), Value::from(6379))]),
    );
    ctx.insert_secrets("", Some(vec![db_secret(), second]));

    let text = ctx.base_context_file()?;
    let db = text.find("dbConn:").unwrap();
    let cache = text.find("cacheConn:{\"port\":6379}\n").unwrap();
    let parameter = text.find("parameter:").unwrap();
    assert!(db < cache && cache < parameter);

    let extended = ctx.extended_context_file()?;
    assert!(extended.ends_with("\ndbConn:{\"host\":\"db.local\"}\ncacheConn:{\"port\":6379}\n"));
    Ok(())
}

#[test]
fn test_cleared_secrets_disappear() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.insert_secrets("", Some(vec![db_secret()]));
    ctx.insert_secrets("", Some(Vec::new()));

    assert!(!ctx.base_context_file()?.contains("dbConn"));
    assert_eq!(ctx.extended_context_file()?, ctx.base_context_file()?);
    Ok(())
}

#[test]
fn test_base_text_with_braces_is_kept() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.set_base(text_instance("\n  {\n  kind: \"Job\"\n}"))?;

    assert!(ctx.base_context_file()?.contains("output: {\n  kind: \"Job\"\n}\n"));
    Ok(())
}

#[test]
fn test_unnamed_auxiliary_uses_empty_key() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.append_auxiliaries(vec![Auxiliary::new(text_instance("a: 1"), "gateway", "")])?;

    assert!(ctx.base_context_file()?.contains("outputs: {\"\": {a: 1}}\n"));
    Ok(())
}

#[test]
fn test_data_keys_keep_insertion_order() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.push_data("zeta", 1);
    ctx.push_data("alpha", "a");
    ctx.push_data("zeta", 2);

    assert!(ctx.base_context_file()?.ends_with("parameter: {}\n\n {\"zeta\":2,\"alpha\":\"a\"}}"));
    Ok(())
}

#[test]
fn test_unencodable_data_aborts_serialization() {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.push_data("ratio", f64::NAN);

    let err = ctx.base_context_file().unwrap_err();
    assert!(matches!(err, ContextError::Encode { .. }));
    assert!(err.to_string().contains("unsupported value: NaN"));

    let err = ctx.extended_context_file().unwrap_err();
    assert!(matches!(err, ContextError::Conversion { .. }));
    assert!(err.to_string().starts_with("failed to convert data"));
}

#[test]
fn test_unencodable_parameter_aborts_serialization() {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.set_parameters(ValueMap::from([("scale".to_string(), Value::Float(f64::INFINITY))]));

    let err = ctx.base_context_file().unwrap_err();
    assert!(
        matches!(&err, ContextError::Encode { section, .. } if section == "parameter"),
        "unexpected error: {err}"
    );
}

#[test]
fn test_unencodable_secret_names_context_field() {
    let mut ctx = RenderContext::new(fixture_data());
    let bad = RequiredSecret::new(
        "ns",
        "db",
        "dbConn",
        ValueMap::from([("weight".to_string(), Value::Float(f64::NEG_INFINITY))]),
    );
    ctx.insert_secrets("", Some(vec![bad]));

    let err = ctx.base_context_file().unwrap_err();
    assert!(matches!(&err, ContextError::Encode { section, .. } if section == "dbConn"));
}

#[test]
fn test_whole_float_parameter_has_no_fraction() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.set_parameters(ValueMap::from([("r".to_string(), Value::Float(3.0))]));
    assert!(ctx.base_context_file()?.contains("parameter: {\"r\":3}\n"));

    ctx.set_parameters(ValueMap::from([("r".to_string(), Value::Float(1.5))]));
    assert!(ctx.base_context_file()?.contains("parameter: {\"r\":1.5}\n"));
    Ok(())
}

#[test]
fn test_markup_in_strings_is_unicode_escaped() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    ctx.push_data("html", "<b>a & b</b>");

    let text = ctx.base_context_file()?;
    assert!(text.ends_with("\n {\"html\":\"\\u003cb\\u003ea \\u0026 b\\u003c/b\\u003e\"}}"));
    Ok(())
}

#[test]
fn test_secret_without_payload_renders_null() -> Result<()> {
    let mut ctx = RenderContext::new(fixture_data());
    let secret = RequiredSecret {
        context_name: "ctx".to_string(),
        ..RequiredSecret::default()
    };
    ctx.insert_secrets("", Some(vec![secret]));

    assert_eq!(
        ctx.base_context_file()?,
        format!("context: {{{IDENTITY}ctx:null\nparameter: {{}}\n}}")
    );
    assert!(ctx.extended_context_file()?.ends_with("}\nctx:null\n"));
    Ok(())
}
