//! MCP tool implementations for the TDX server.
//!
//! Each tool is a free function of `(client, input)` that never fails past
//! its own boundary: client errors come back as `Err(String)` with a
//! sanitized message, which the server reports as an error-flagged result.

mod feed;
mod inputs;
mod tickets;

pub use feed::*;
pub use inputs::*;
pub use tickets::*;

use crate::error::TdxError;
use crate::tdx_client::TdxClient;

/// Logs a tool failure and renders it as `"<context>: <message>"`.
fn failure(client: &TdxClient, context: &str, error: &TdxError) -> String {
    let sanitized = error.sanitized_display(&client.secrets_for_sanitization());
    tracing::error!(error = %sanitized, "{}", context);
    format!("{}: {}", context, sanitized)
}
