//! MCP server implementation for TDX.
//!
//! This module defines the `TdxServer` struct that implements the MCP
//! `ServerHandler` trait, exposing TeamDynamix ticket operations as tools.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};

use crate::tdx_client::TdxClient;
use crate::tools::{
    self, GetTicketFeedInput, GetTicketInput, GetTicketResourcesInput, SearchTicketsInput,
};

/// The TDX MCP server.
///
/// This server exposes TDX ticketing operations as MCP tools. Tool failures
/// are returned as error-flagged results and never terminate the server.
#[derive(Clone)]
pub struct TdxServer {
    /// TDX client for API operations.
    client: TdxClient,
    /// Tool router for MCP tool dispatch.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TdxServer {
    /// Creates a new TDX server instance.
    ///
    /// # Arguments
    ///
    /// * `client` - The TDX client for API operations
    pub fn new(client: TdxClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Search for TDX tickets with filters. Returns a list of matching tickets (limited fields).")]
    async fn search_tickets(
        &self,
        Parameters(input): Parameters<SearchTicketsInput>,
    ) -> Result<String, String> {
        tools::search_tickets(&self.client, input).await
    }

    #[tool(description = "Get full details of a specific TDX ticket by ID.")]
    async fn get_ticket(
        &self,
        Parameters(input): Parameters<GetTicketInput>,
    ) -> Result<String, String> {
        tools::get_ticket(&self.client, input).await
    }

    #[tool(description = "List all active ticket forms for the TDX ticketing application.")]
    async fn get_ticket_forms(&self) -> Result<String, String> {
        tools::get_ticket_forms(&self.client).await
    }

    #[tool(description = "Search for eligible ticket assignment resources (people/groups).")]
    async fn get_ticket_resources(
        &self,
        Parameters(input): Parameters<GetTicketResourcesInput>,
    ) -> Result<String, String> {
        tools::get_ticket_resources(&self.client, input).await
    }

    #[tool(description = "Get the activity feed (comments, updates, status changes) for a TDX ticket.")]
    async fn get_ticket_feed(
        &self,
        Parameters(input): Parameters<GetTicketFeedInput>,
    ) -> Result<String, String> {
        tools::get_ticket_feed(&self.client, input).await
    }
}

#[tool_handler]
impl ServerHandler for TdxServer {
    /// Returns server information for the MCP initialize handshake.
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "TDX MCP provides read access to TeamDynamix tickets. \
                 Use search_tickets to find tickets, get_ticket for full details, \
                 and get_ticket_feed for comments and status history. \
                 get_ticket_forms lists the available forms and \
                 get_ticket_resources finds people or groups for assignment."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
