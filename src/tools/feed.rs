//! Ticket feed tool.

use crate::error::TdxError;
use crate::models::{FeedEntry, FeedEntrySummary};
use crate::tdx_client::TdxClient;

use super::failure;
use super::inputs::GetTicketFeedInput;

/// Fetches the activity feed of a ticket.
///
/// An empty feed is reported as plain text, not as an empty JSON list.
pub async fn get_ticket_feed(
    client: &TdxClient,
    input: GetTicketFeedInput,
) -> Result<String, String> {
    tracing::debug!(ticket_id = input.ticket_id, "get_ticket_feed tool called");

    get_ticket_feed_inner(client, input.ticket_id)
        .await
        .map_err(|e| {
            failure(
                client,
                &format!("Error retrieving feed for ticket {}", input.ticket_id),
                &e,
            )
        })
}

async fn get_ticket_feed_inner(client: &TdxClient, ticket_id: u64) -> Result<String, TdxError> {
    let feed: Vec<FeedEntry> = client
        .get_json(&format!("/tickets/{}/feed", ticket_id))
        .await?
        .unwrap_or_default();

    if feed.is_empty() {
        return Ok(format!("No feed entries found for ticket {}.", ticket_id));
    }

    let summary: Vec<FeedEntrySummary<'_>> = feed.iter().map(FeedEntrySummary::from).collect();
    Ok(format!(
        "Feed for ticket {} ({} entries):\n\n{}",
        ticket_id,
        feed.len(),
        serde_json::to_string_pretty(&summary)?
    ))
}
