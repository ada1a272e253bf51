//! Tool input parameter structs for MCP tools.
//!
//! This module defines the input types for each MCP tool, with
//! JSON Schema derivation for MCP tool discovery. Argument names follow
//! the camelCase used by TDX clients (`ticketId`, `statusIDs`, ...).
//!
//! # Input Sanitization
//!
//! Input structs with free-text fields implement `sanitize()`, which trims
//! whitespace and drops empty strings. Call it before processing input.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

use crate::models::TicketSearch;

/// Default number of tickets returned by `search_tickets`.
pub const DEFAULT_MAX_RESULTS: u32 = 25;

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

/// Helper function to trim an optional string.
fn trim_option(s: &Option<String>) -> Option<String> {
    s.as_ref().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Input parameters for the search_tickets tool.
///
/// All filters are optional; omitted filters are left out of the search body.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchTicketsInput {
    /// Free-text search across ticket fields.
    #[serde(default)]
    pub search_text: Option<String>,

    /// Filter by status IDs.
    #[serde(default, rename = "statusIDs")]
    pub status_ids: Option<Vec<i64>>,

    /// Filter by priority IDs.
    #[serde(default, rename = "priorityIDs")]
    pub priority_ids: Option<Vec<i64>>,

    /// Filter by requestor UIDs.
    #[serde(default)]
    pub requestor_uids: Option<Vec<String>>,

    /// Filter by responsible person UIDs.
    #[serde(default)]
    pub responsibility_uids: Option<Vec<String>>,

    /// Filter by responsible group IDs.
    #[serde(default, rename = "responsibilityGroupIDs")]
    pub responsibility_group_ids: Option<Vec<i64>>,

    /// Filter tickets created on or after this date (YYYY-MM-DD).
    #[serde(default)]
    pub created_date_from: Option<String>,

    /// Filter tickets created on or before this date (YYYY-MM-DD).
    #[serde(default)]
    pub created_date_to: Option<String>,

    /// Filter tickets modified on or after this date (YYYY-MM-DD).
    #[serde(default)]
    pub modified_date_from: Option<String>,

    /// Filter tickets modified on or before this date (YYYY-MM-DD).
    #[serde(default)]
    pub modified_date_to: Option<String>,

    /// Maximum number of results to return (default 25).
    #[serde(default = "default_max_results")]
    pub max_results: u32,
}

impl SearchTicketsInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            search_text: trim_option(&self.search_text),
            created_date_from: trim_option(&self.created_date_from),
            created_date_to: trim_option(&self.created_date_to),
            modified_date_from: trim_option(&self.modified_date_from),
            modified_date_to: trim_option(&self.modified_date_to),
            ..self
        }
    }

    /// Collapses the filters into a TDX search body.
    pub fn to_search(&self) -> TicketSearch {
        TicketSearch {
            max_results: Some(self.max_results),
            search_text: self.search_text.clone(),
            status_ids: self.status_ids.clone(),
            priority_ids: self.priority_ids.clone(),
            requestor_uids: self.requestor_uids.clone(),
            responsibility_uids: self.responsibility_uids.clone(),
            responsibility_group_ids: self.responsibility_group_ids.clone(),
            created_date_from: self.created_date_from.clone(),
            created_date_to: self.created_date_to.clone(),
            modified_date_from: self.modified_date_from.clone(),
            modified_date_to: self.modified_date_to.clone(),
        }
    }
}

/// Input parameters for the get_ticket tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTicketInput {
    /// The ticket ID to retrieve.
    pub ticket_id: u64,
}

/// Input parameters for the get_ticket_resources tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTicketResourcesInput {
    /// Search text to filter resources (max 5 results returned).
    #[serde(default)]
    pub search_text: Option<String>,
}

impl GetTicketResourcesInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            search_text: trim_option(&self.search_text),
        }
    }
}

/// Input parameters for the get_ticket_feed tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTicketFeedInput {
    /// The ticket ID to get the feed for.
    pub ticket_id: u64,
}
