//! Ticket form models.

use serde::{Deserialize, Serialize};

/// A ticket form defined in the ticketing application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TicketForm {
    /// Form ID.
    #[serde(rename = "ID")]
    pub id: i64,

    /// Form name.
    #[serde(default)]
    pub name: Option<String>,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// Whether the form can be used for new tickets.
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Compact view of a [`TicketForm`].
#[allow(missing_docs)]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketFormSummary<'a> {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl<'a> From<&'a TicketForm> for TicketFormSummary<'a> {
    fn from(form: &'a TicketForm) -> Self {
        Self {
            id: form.id,
            name: form.name.as_deref(),
            description: form.description.as_deref(),
            is_active: form.is_active,
        }
    }
}
