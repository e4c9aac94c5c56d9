use desk_core::record::null_as_default;
use desk_core::{CollectionKind, FieldTable, Record};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Organization {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub domain_names: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: String,
    #[serde(deserialize_with = "null_as_default")]
    pub shared_tickets: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

static ORGANIZATION_FIELDS: Lazy<FieldTable<Organization>> = Lazy::new(|| {
    FieldTable::<Organization>::new("_id")
        .str("url", |o| o.url.as_str())
        .str("external_id", |o| o.external_id.as_str())
        .str("name", |o| o.name.as_str())
        .str_set("domain_names", |o| o.domain_names.as_slice())
        .str("created_at", |o| o.created_at.as_str())
        .str("details", |o| o.details.as_str())
        .bool("shared_tickets", |o| o.shared_tickets)
        .str_set("tags", |o| o.tags.as_slice())
});

impl Record for Organization {
    type Key = i64;
    const KIND: CollectionKind = CollectionKind::Organizations;

    fn key(&self) -> i64 {
        self.id
    }

    fn fields() -> &'static FieldTable<Self> {
        &ORGANIZATION_FIELDS
    }
}
