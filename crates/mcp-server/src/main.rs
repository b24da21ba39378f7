//! Winter CMS MCP Server
//!
//! Exposes read-only project-structure reports to AI agents via MCP.
//!
//! ## Tools
//!
//! - `project_overview` - version, environment, theme, counts
//! - `project_structure` - plugins, components, backend controllers
//! - `scaffolding_commands` - reference guide to the generators
//! - `scaffolding_discovery` - generators registered with the host console
//! - `view_structure` - themes and plugin views across the dual view system
//! - `development_guide` - conventions, workflow, service availability
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "winter": {
//!       "command": "winter-mcp",
//!       "env": { "WINTER_MCP_ROOT": "/var/www/site" }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

mod tools;

use tools::WinterMcpService;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let root = tools::resolve_root();
    log::info!(
        "Starting Winter MCP server for project at {}",
        root.display()
    );

    let service = WinterMcpService::new(root);
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Winter MCP server stopped");
    Ok(())
}
