//! Liftlog
//!
//! An MCP server for converting and displaying lifting weights.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing_subscriber::EnvFilter;

use liftlog::build_info;
use liftlog::config::Config;
use liftlog::mcp::LiftlogService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("liftlog=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    build_info::print_startup_banner(&config);

    eprintln!("Starting MCP server on stdio...");
    let service = LiftlogService::new(config);

    let transport = (stdin(), stdout());
    let server = service.serve(transport).await?;

    server.waiting().await?;

    Ok(())
}
