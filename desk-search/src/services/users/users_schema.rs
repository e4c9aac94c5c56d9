use desk_core::record::null_as_default;
use desk_core::{CollectionKind, FieldTable, Record};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub external_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alias: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub verified: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub shared: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub locale: String,
    #[serde(deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub last_login_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub signature: String,
    #[serde(deserialize_with = "null_as_default")]
    pub organization_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub suspended: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
}

static USER_FIELDS: Lazy<FieldTable<User>> = Lazy::new(|| {
    FieldTable::<User>::new("_id")
        .str("url", |u| u.url.as_str())
        .str("external_id", |u| u.external_id.as_str())
        .str("name", |u| u.name.as_str())
        .str("alias", |u| u.alias.as_str())
        .str("created_at", |u| u.created_at.as_str())
        .bool("active", |u| u.active)
        .bool("verified", |u| u.verified)
        .bool("shared", |u| u.shared)
        .str("locale", |u| u.locale.as_str())
        .str("timezone", |u| u.timezone.as_str())
        .str("last_login_at", |u| u.last_login_at.as_str())
        .str("email", |u| u.email.as_str())
        .str("phone", |u| u.phone.as_str())
        .str("signature", |u| u.signature.as_str())
        .int("organization_id", |u| u.organization_id)
        .str_set("tags", |u| u.tags.as_slice())
        .bool("suspended", |u| u.suspended)
        .str("role", |u| u.role.as_str())
});

impl Record for User {
    type Key = i64;
    const KIND: CollectionKind = CollectionKind::Users;

    fn key(&self) -> i64 {
        self.id
    }

    fn fields() -> &'static FieldTable<Self> {
        &USER_FIELDS
    }
}
