use std::fmt::Display;
use std::hash::Hash;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::filter::FieldTable;
use crate::source::CollectionKind;

/// A row of one of the desk collections.
///
/// `Key` is the primary key; it is parsed from the raw filter value with
/// `FromStr` when searching by the primary key field.
pub trait Record: DeserializeOwned + Send + Sync + 'static {
    type Key: Eq
        + Hash
        + Clone
        + FromStr<Err: std::error::Error + Send + Sync + 'static>
        + Display
        + Send
        + Sync;

    const KIND: CollectionKind;

    fn key(&self) -> Self::Key;

    /// Searchable fields of this record type.
    fn fields() -> &'static FieldTable<Self>
    where
        Self: Sized;
}

/// Decode JSON `null` as the type's zero value, same as an absent field.
///
/// Use together with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
