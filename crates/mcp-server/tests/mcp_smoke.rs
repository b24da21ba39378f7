use anyhow::{Context, Result};
use rmcp::{model::CallToolRequestParam, service::ServiceExt, transport::TokioChildProcess};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::time::Duration;
use tokio::process::Command;

#[tokio::test]
async fn mcp_exposes_report_tools() -> Result<()> {
    let temp = tempfile::tempdir().context("tempdir")?;
    let root = temp.path();
    let layouts = root.join("themes/default/layouts");
    fs::create_dir_all(&layouts).context("mkdir layouts")?;
    fs::write(layouts.join("default.htm"), b"").context("write layout")?;

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_winter-mcp"));
    cmd.env("WINTER_MCP_ROOT", root);
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    let service = tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")??;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let tool_names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "project_overview",
        "project_structure",
        "scaffolding_commands",
        "scaffolding_discovery",
        "view_structure",
        "development_guide",
    ] {
        assert!(
            tool_names.contains(expected),
            "missing tool '{expected}' (available: {tool_names:?})"
        );
    }

    let views_result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: "view_structure".into(),
            arguments: Some(serde_json::Map::new()),
        }),
    )
    .await
    .context("timeout calling view_structure")??;

    assert_ne!(views_result.is_error, Some(true), "view_structure errored");
    let text = views_result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("view_structure missing text output")?;
    let report: Value = serde_json::from_str(text).context("view_structure output is JSON")?;
    assert_eq!(
        report["frontend_views"]["themes"]["default"]["layouts"],
        1,
        "unexpected report: {report}"
    );

    service.cancel().await.context("shutdown mcp service")?;
    Ok(())
}
