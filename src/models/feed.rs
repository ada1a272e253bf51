//! Ticket feed (activity stream) models.

use serde::{Deserialize, Serialize};

/// A single entry in a ticket's feed: a comment, update or status change.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FeedEntry {
    /// Entry ID. TDX returns this as a number on some endpoints and a
    /// string on others, so it is kept as raw JSON.
    #[serde(rename = "ID")]
    pub id: serde_json::Value,

    /// Entry text, possibly HTML.
    #[serde(default)]
    pub body: Option<String>,

    /// When the entry was created.
    #[serde(default)]
    pub created_date: Option<String>,

    /// Author's full name.
    #[serde(default)]
    pub created_full_name: Option<String>,

    /// Whether the entry is hidden from the requestor.
    #[serde(default)]
    pub is_private: Option<bool>,
}

/// Compact view of a [`FeedEntry`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedEntrySummary<'a> {
    pub id: &'a serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<&'a str>,
}

impl<'a> From<&'a FeedEntry> for FeedEntrySummary<'a> {
    fn from(entry: &'a FeedEntry) -> Self {
        Self {
            id: &entry.id,
            date: entry.created_date.as_deref(),
            author: entry.created_full_name.as_deref(),
            is_private: entry.is_private,
            body: entry.body.as_deref(),
        }
    }
}
