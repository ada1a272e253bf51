//! Ticket models for the TDX ticketing API.
//!
//! Only the fields needed for search summaries are modelled; `get_ticket`
//! passes the full JSON through untouched.

use serde::{Deserialize, Serialize};

/// Search body for `POST /api/{appId}/tickets/search`.
///
/// Absent filters are omitted from the JSON entirely, never sent as `null`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TicketSearch {
    /// Maximum number of tickets to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,

    /// Free-text search across ticket fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_text: Option<String>,

    /// Status IDs to include.
    #[serde(rename = "StatusIDs", skip_serializing_if = "Option::is_none")]
    pub status_ids: Option<Vec<i64>>,

    /// Priority IDs to include.
    #[serde(rename = "PriorityIDs", skip_serializing_if = "Option::is_none")]
    pub priority_ids: Option<Vec<i64>>,

    /// Requestor UIDs to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor_uids: Option<Vec<String>>,

    /// Responsible person UIDs to include.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibility_uids: Option<Vec<String>>,

    /// Responsible group IDs to include.
    #[serde(rename = "ResponsibilityGroupIDs", skip_serializing_if = "Option::is_none")]
    pub responsibility_group_ids: Option<Vec<i64>>,

    /// Lower bound on creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_from: Option<String>,

    /// Upper bound on creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_to: Option<String>,

    /// Lower bound on modification date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_from: Option<String>,

    /// Upper bound on modification date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_to: Option<String>,
}

/// A ticket as returned by search, reduced to the summary fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ticket {
    /// Ticket ID.
    #[serde(rename = "ID")]
    pub id: i64,

    /// Ticket title.
    #[serde(default)]
    pub title: Option<String>,

    /// Status display name.
    #[serde(default)]
    pub status_name: Option<String>,

    /// Priority display name.
    #[serde(default)]
    pub priority_name: Option<String>,

    /// Requestor full name.
    #[serde(default)]
    pub requestor_name: Option<String>,

    /// Responsible person, when assigned to an individual.
    #[serde(default)]
    pub responsible_full_name: Option<String>,

    /// Responsible group, when assigned to a group.
    #[serde(default)]
    pub responsible_group_name: Option<String>,

    /// Creation timestamp as returned by TDX.
    #[serde(default)]
    pub created_date: Option<String>,

    /// Last modification timestamp as returned by TDX.
    #[serde(default)]
    pub modified_date: Option<String>,
}

/// Compact view of a [`Ticket`] returned by the search tool.
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketSummary<'a> {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_group: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<&'a str>,
}

impl<'a> From<&'a Ticket> for TicketSummary<'a> {
    fn from(t: &'a Ticket) -> Self {
        Self {
            id: t.id,
            title: t.title.as_deref(),
            status: t.status_name.as_deref(),
            priority: t.priority_name.as_deref(),
            requestor: t.requestor_name.as_deref(),
            responsible: t.responsible_full_name.as_deref(),
            responsible_group: t.responsible_group_name.as_deref(),
            created: t.created_date.as_deref(),
            modified: t.modified_date.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_search_serializes_only_max_results() {
        let search = TicketSearch {
            max_results: Some(25),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&search).unwrap(), json!({"MaxResults": 25}));
    }

    #[test]
    fn test_search_uses_tdx_id_suffixes() {
        let search = TicketSearch {
            status_ids: Some(vec![1, 2]),
            responsibility_group_ids: Some(vec![9]),
            requestor_uids: Some(vec!["u-1".to_string()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&search).unwrap(),
            json!({
                "StatusIDs": [1, 2],
                "ResponsibilityGroupIDs": [9],
                "RequestorUids": ["u-1"]
            })
        );
    }

    #[test]
    fn test_ticket_ignores_unknown_fields() {
        let ticket: Ticket = serde_json::from_value(json!({
            "ID": 555,
            "Title": "Printer on fire",
            "StatusName": "New",
            "Attributes": [],
            "IsOnHold": false
        }))
        .unwrap();
        assert_eq!(ticket.id, 555);
        assert_eq!(ticket.title.as_deref(), Some("Printer on fire"));
        assert!(ticket.priority_name.is_none());
    }

    #[test]
    fn test_ticket_summary_omits_absent_fields() {
        let ticket: Ticket = serde_json::from_value(json!({"ID": 3, "Title": "Badge reader"}))
            .unwrap();
        let summary = serde_json::to_value(TicketSummary::from(&ticket)).unwrap();
        assert_eq!(summary, json!({"id": 3, "title": "Badge reader"}));
    }

    #[test]
    fn test_ticket_summary_uses_camel_case() {
        let ticket: Ticket = serde_json::from_value(json!({
            "ID": 1,
            "ResponsibleGroupName": "Desktop Support"
        }))
        .unwrap();
        let summary = serde_json::to_value(TicketSummary::from(&ticket)).unwrap();
        assert_eq!(summary["responsibleGroup"], "Desktop Support");
        assert_eq!(summary["id"], 1);
    }
}
