//! Ticket tools: search, fetch, forms and assignment resources.

use serde_json::Value;

use crate::error::TdxError;
use crate::models::{Ticket, TicketForm, TicketFormSummary, TicketSummary};
use crate::tdx_client::TdxClient;

use super::inputs::{GetTicketInput, GetTicketResourcesInput, SearchTicketsInput};
use super::failure;

/// Searches tickets and renders a compact summary of each match.
pub async fn search_tickets(
    client: &TdxClient,
    input: SearchTicketsInput,
) -> Result<String, String> {
    let input = input.sanitize();
    tracing::debug!(?input, "search_tickets tool called");

    search_tickets_inner(client, &input)
        .await
        .map_err(|e| failure(client, "Error searching tickets", &e))
}

async fn search_tickets_inner(
    client: &TdxClient,
    input: &SearchTicketsInput,
) -> Result<String, TdxError> {
    let tickets: Vec<Ticket> = client
        .post_json("/tickets/search", &input.to_search())
        .await?
        .unwrap_or_default();

    if tickets.is_empty() {
        return Ok("No tickets found matching the search criteria.".to_string());
    }

    let summary: Vec<TicketSummary<'_>> = tickets.iter().map(TicketSummary::from).collect();
    Ok(format!(
        "Found {} ticket(s):\n\n{}",
        tickets.len(),
        serde_json::to_string_pretty(&summary)?
    ))
}

/// Fetches one ticket and renders its full JSON.
pub async fn get_ticket(client: &TdxClient, input: GetTicketInput) -> Result<String, String> {
    tracing::debug!(ticket_id = input.ticket_id, "get_ticket tool called");

    get_ticket_inner(client, input.ticket_id).await.map_err(|e| {
        failure(
            client,
            &format!("Error retrieving ticket {}", input.ticket_id),
            &e,
        )
    })
}

async fn get_ticket_inner(client: &TdxClient, ticket_id: u64) -> Result<String, TdxError> {
    match client.get(&format!("/tickets/{}", ticket_id)).await? {
        Some(ticket) => Ok(serde_json::to_string_pretty(&ticket)?),
        None => Ok(format!("Ticket {} returned no content.", ticket_id)),
    }
}

/// Lists the active ticket forms of the application.
pub async fn get_ticket_forms(client: &TdxClient) -> Result<String, String> {
    tracing::debug!("get_ticket_forms tool called");

    get_ticket_forms_inner(client)
        .await
        .map_err(|e| failure(client, "Error retrieving ticket forms", &e))
}

async fn get_ticket_forms_inner(client: &TdxClient) -> Result<String, TdxError> {
    let forms: Vec<TicketForm> = client.get_json("/tickets/forms").await?.unwrap_or_default();

    if forms.is_empty() {
        return Ok("No active ticket forms found.".to_string());
    }

    let summary: Vec<TicketFormSummary<'_>> = forms.iter().map(TicketFormSummary::from).collect();
    Ok(format!(
        "Found {} form(s):\n\n{}",
        forms.len(),
        serde_json::to_string_pretty(&summary)?
    ))
}

/// Searches people and groups a ticket can be assigned to.
///
/// TDX caps this endpoint at five results; entries are echoed unchanged.
pub async fn get_ticket_resources(
    client: &TdxClient,
    input: GetTicketResourcesInput,
) -> Result<String, String> {
    let input = input.sanitize();
    tracing::debug!(?input, "get_ticket_resources tool called");

    get_ticket_resources_inner(client, input.search_text.as_deref())
        .await
        .map_err(|e| failure(client, "Error retrieving resources", &e))
}

async fn get_ticket_resources_inner(
    client: &TdxClient,
    search_text: Option<&str>,
) -> Result<String, TdxError> {
    let endpoint = match search_text {
        Some(text) => format!(
            "/tickets/resources?searchText={}",
            urlencoding::encode(text)
        ),
        None => "/tickets/resources".to_string(),
    };

    let resources: Vec<Value> = client.get_json(&endpoint).await?.unwrap_or_default();

    if resources.is_empty() {
        return Ok("No matching resources found.".to_string());
    }

    Ok(format!(
        "Found {} resource(s):\n\n{}",
        resources.len(),
        serde_json::to_string_pretty(&resources)?
    ))
}
