use desk_core::record::null_as_default;
use desk_core::{CollectionKind, FieldTable, Record};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A support ticket as it appears in `tickets.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ticket {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub priority: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub submitter_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub assignee_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub organization_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub has_incidents: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub due_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub via: String,
}

static TICKET_FIELDS: Lazy<FieldTable<Ticket>> = Lazy::new(|| {
    FieldTable::<Ticket>::new("_id")
        .str("url", |t| t.url.as_str())
        .str("external_id", |t| t.external_id.as_str())
        .str("created_at", |t| t.created_at.as_str())
        .str("type", |t| t.kind.as_str())
        .str("subject", |t| t.subject.as_str())
        .str("description", |t| t.description.as_str())
        .str("priority", |t| t.priority.as_str())
        .str("status", |t| t.status.as_str())
        .int("submitter_id", |t| t.submitter_id)
        .int("assignee_id", |t| t.assignee_id)
        .int("organization_id", |t| t.organization_id)
        .str_set("tags", |t| t.tags.as_slice())
        .bool("has_incidents", |t| t.has_incidents)
        .str("due_at", |t| t.due_at.as_str())
        .str("via", |t| t.via.as_str())
});

impl Record for Ticket {
    type Key = String;
    const KIND: CollectionKind = CollectionKind::Tickets;

    fn key(&self) -> String {
        self.id.clone()
    }

    fn fields() -> &'static FieldTable<Self> {
        &TICKET_FIELDS
    }
}
