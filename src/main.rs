//! tdx-mcp - MCP server for the TeamDynamix ticketing API
//!
//! This binary runs as an MCP server using stdio transport, allowing
//! MCP clients to search and read TDX tickets through natural language.
//!
//! # Configuration
//!
//! Set the following environment variables (or use a `.env` file):
//!
//! - `TDX_BASE_URL`: Base URL of the TDX web API
//! - `TDX_APP_ID`: Ticketing application ID
//! - `TDX_AUTH_METHOD`: `login` or `loginadmin`
//! - `TDX_USERNAME` / `TDX_PASSWORD` for `login`
//! - `TDX_BEID` / `TDX_WEB_SERVICES_KEY` for `loginadmin`
//!
//! # Usage
//!
//! ```bash
//! TDX_BASE_URL=https://example.teamdynamix.com/TDWebApi TDX_APP_ID=42 \
//!   TDX_AUTH_METHOD=loginadmin TDX_BEID=... TDX_WEB_SERVICES_KEY=... ./tdx-mcp
//! ```

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::{fmt, EnvFilter};

use tdx_mcp::{config, server, tdx_client};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries MCP JSON-RPC; logs go to stderr
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tdx_mcp=info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Starting tdx-mcp server v{}", env!("CARGO_PKG_VERSION"));

    let config = config::Config::from_env().context("Failed to load configuration")?;

    // Fail fast if the selected auth method is missing its secrets
    let credentials = config
        .credentials()
        .context("Failed to load credentials")?;

    tracing::debug!(
        base_url = %config.base_url,
        app_id = %config.app_id,
        auth_method = %credentials.method(),
        "Configuration loaded"
    );

    let client = tdx_client::TdxClient::new(&config).context("Failed to create TDX client")?;

    tracing::info!("Testing connection to TeamDynamix...");
    if let Err(e) = client.test_connection().await {
        tracing::error!(
            error = %e.sanitized_display(&client.secrets_for_sanitization()),
            "Connection test failed"
        );
        tracing::warn!(
            "Server will start but may not be able to reach TDX. \
             Check configuration and network connectivity."
        );
    }

    let server = server::TdxServer::new(client);

    tracing::info!("Server initialized, starting stdio transport");

    let service = server
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("serving error: {:?}", e);
        })
        .context("Failed to start server")?;

    service
        .waiting()
        .await
        .context("Server error during operation")?;

    tracing::info!("Server shutting down");

    Ok(())
}
