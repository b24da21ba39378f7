//! MCP tools for Winter CMS project introspection.
//!
//! Six read-only, parameterless tools, one per report operation. Each call
//! re-detects the host capabilities and rebuilds its report from the
//! directory tree, so the response always reflects the current state of
//! the project.

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use serde_json::Value;
use std::path::PathBuf;
use winter_discovery::{Reporter, REPORT_CATALOG};

/// Environment variable overriding the introspected project root.
pub const ROOT_ENV_VAR: &str = "WINTER_MCP_ROOT";

/// Project root for this process: `WINTER_MCP_ROOT`, else the current
/// directory.
pub fn resolve_root() -> PathBuf {
    std::env::var_os(ROOT_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The report tools take no arguments; reports are parameterless reads.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct NoArguments {}

/// Winter CMS MCP service.
#[derive(Clone)]
pub struct WinterMcpService {
    /// Project root every report is computed against.
    root: PathBuf,
    /// Tool router
    tool_router: ToolRouter<Self>,
}

impl WinterMcpService {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            tool_router: Self::tool_router(),
        }
    }

    /// Fresh reporter with capabilities re-detected from the snapshot.
    fn reporter(&self) -> Reporter {
        Reporter::detect(&self.root)
    }

    fn render(report: Value) -> CallToolResult {
        CallToolResult::success(vec![Content::text(
            serde_json::to_string_pretty(&report).unwrap_or_default(),
        )])
    }
}

#[tool_handler]
impl ServerHandler for WinterMcpService {
    fn get_info(&self) -> ServerInfo {
        let mut instructions = vec![
            "Read-only introspection of a Winter CMS project for AI agents. Start with project_overview, then project_structure for plugins/components/controllers and view_structure for the template layout.".to_string(),
            "Tools:".to_string(),
        ];
        for report in REPORT_CATALOG {
            instructions.push(format!("- {}: {}", report.name, report.summary));
        }

        ServerInfo {
            instructions: Some(instructions.join("\n")),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[tool_router]
impl WinterMcpService {
    #[tool(
        description = "Get Winter CMS project overview: version, environment, active theme, and plugin/component counts."
    )]
    pub async fn project_overview(
        &self,
        Parameters(_request): Parameters<NoArguments>,
    ) -> Result<CallToolResult, McpError> {
        Ok(Self::render(self.reporter().project_overview()))
    }

    #[tool(
        description = "Get complete Winter CMS project structure: plugins, components, and backend controllers."
    )]
    pub async fn project_structure(
        &self,
        Parameters(_request): Parameters<NoArguments>,
    ) -> Result<CallToolResult, McpError> {
        Ok(Self::render(self.reporter().project_structure()))
    }

    #[tool(
        description = "Get comprehensive guide to Winter CMS scaffolding commands for code generation. Always use these before creating files manually."
    )]
    pub async fn scaffolding_commands(
        &self,
        Parameters(_request): Parameters<NoArguments>,
    ) -> Result<CallToolResult, McpError> {
        Ok(Self::render(self.reporter().scaffolding_commands()))
    }

    #[tool(
        description = "Discover the scaffolding commands registered with the host console, with examples and usage."
    )]
    pub async fn scaffolding_discovery(
        &self,
        Parameters(_request): Parameters<NoArguments>,
    ) -> Result<CallToolResult, McpError> {
        Ok(Self::render(self.reporter().scaffolding_discovery()))
    }

    #[tool(
        description = "Map view files and understand the Winter CMS dual view system: Twig (.htm) frontend, PHP (.php) backend."
    )]
    pub async fn view_structure(
        &self,
        Parameters(_request): Parameters<NoArguments>,
    ) -> Result<CallToolResult, McpError> {
        Ok(Self::render(self.reporter().view_structure()))
    }

    #[tool(
        description = "Get essential Winter CMS development guidance: architecture patterns, services, and best practices."
    )]
    pub async fn development_guide(
        &self,
        Parameters(_request): Parameters<NoArguments>,
    ) -> Result<CallToolResult, McpError> {
        Ok(Self::render(self.reporter().development_guide()))
    }
}
