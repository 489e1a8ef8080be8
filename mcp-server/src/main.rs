//! Calculator MCP Server
//!
//! This MCP server lets AI agents use the calculator API as a tool.
//! The API location comes from `CALCULATOR_API_URL`.

mod client;
mod server;

use anyhow::Result;
use rmcp::ServiceExt;
use server::CalculatorServer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to stderr (stdout is used for MCP protocol)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting calculator MCP server");

    let server = CalculatorServer::from_env()?;

    // Serve over stdio - pass as tuple (stdin, stdout)
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let service = server.serve(transport).await?;

    // Wait for shutdown
    service.waiting().await?;

    Ok(())
}
