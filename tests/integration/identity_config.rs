//! Loading component identity from TOML files.

use anyhow::Result;
use render_context::config::{ContextData, ContextIdentity};
use render_context::process::RenderContext;
use tempfile::TempDir;
use tokio::fs;

#[tokio::test]
async fn test_load_identity_and_render() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join("identity.toml");
    fs::write(
        &path,
        "name = \"web\"\nnamespace = \"prod\"\nworkflow_name = \"deploy\"\npublish_version = \"r7\"\n",
    )
    .await?;

    let identity = ContextIdentity::load_from(&path).await?;
    let ctx = RenderContext::new(ContextData::new(identity));

    assert_eq!(
        ctx.base_context_file()?,
        "context: {name: \"web\"\nnamespace: \"prod\"\nworkflowName: \"deploy\"\npublishVersion: \"r7\"\nparameter: {}\n}"
    );
    assert_eq!(ctx.base_context_labels().get("name").map(String::as_str), Some("web"));
    Ok(())
}

#[tokio::test]
async fn test_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = ContextIdentity::load_from(&path).await.unwrap_err();
    assert!(err.to_string().contains("absent.toml"));
}

#[tokio::test]
async fn test_invalid_toml_reports_parse_failure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = ").await.unwrap();

    let err = ContextIdentity::load_from(&path).await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse context identity"));
}
