//! # Field filtering
//!
//! Every record type publishes a [`FieldTable`]: the primary key field name
//! plus one descriptor per searchable field. A descriptor is a kind tag and
//! an accessor, so a search is one table lookup, one coercion of the raw
//! value, and one generic comparison per record.
//!
//! Matching is always exact:
//! - `Int` fields parse the value as `i64`
//! - `Bool` fields accept `true` / `false` in any ASCII case
//! - `Str` fields compare case-sensitively
//! - `StrSet` fields match when any element equals the value

use indexmap::IndexMap;

use crate::errors::{DeskError, DeskResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Bool,
    Str,
    StrSet,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Int => "integer",
            FieldKind::Bool => "boolean",
            FieldKind::Str => "string",
            FieldKind::StrSet => "string set",
        }
    }
}

/// Kind tag plus accessor for one searchable field.
pub enum Field<R> {
    Int(fn(&R) -> i64),
    Bool(fn(&R) -> bool),
    Str(fn(&R) -> &str),
    StrSet(fn(&R) -> &[String]),
}

impl<R> Field<R> {
    pub fn kind(&self) -> FieldKind {
        match self {
            Field::Int(_) => FieldKind::Int,
            Field::Bool(_) => FieldKind::Bool,
            Field::Str(_) => FieldKind::Str,
            Field::StrSet(_) => FieldKind::StrSet,
        }
    }

    /// Coerce `raw` to this field's type.
    pub fn criterion<'v>(&self, name: &str, raw: &'v str) -> DeskResult<Criterion<'v, R>> {
        Ok(match self {
            Field::Int(get) => Criterion::Int(*get, parse_int(name, raw)?),
            Field::Bool(get) => Criterion::Bool(*get, parse_bool(name, raw)?),
            Field::Str(get) => Criterion::Str(*get, raw),
            Field::StrSet(get) => Criterion::StrSet(*get, raw),
        })
    }
}

/// A field accessor bound to an already coerced value.
pub enum Criterion<'v, R> {
    Int(fn(&R) -> i64, i64),
    Bool(fn(&R) -> bool, bool),
    Str(fn(&R) -> &str, &'v str),
    StrSet(fn(&R) -> &[String], &'v str),
}

impl<R> Criterion<'_, R> {
    #[inline]
    pub fn matches(&self, record: &R) -> bool {
        match self {
            Criterion::Int(get, want) => get(record) == *want,
            Criterion::Bool(get, want) => get(record) == *want,
            Criterion::Str(get, want) => get(record) == *want,
            Criterion::StrSet(get, want) => get(record).iter().any(|tag| tag == want),
        }
    }
}

/// Field dispatch table for one record type. Build once, keep in a static.
pub struct FieldTable<R> {
    primary_key: &'static str,
    fields: IndexMap<&'static str, Field<R>>,
}

impl<R> FieldTable<R> {
    pub fn new(primary_key: &'static str) -> Self {
        Self {
            primary_key,
            fields: IndexMap::new(),
        }
    }

    pub fn int(mut self, name: &'static str, get: fn(&R) -> i64) -> Self {
        self.fields.insert(name, Field::Int(get));
        self
    }

    pub fn bool(mut self, name: &'static str, get: fn(&R) -> bool) -> Self {
        self.fields.insert(name, Field::Bool(get));
        self
    }

    pub fn str(mut self, name: &'static str, get: fn(&R) -> &str) -> Self {
        self.fields.insert(name, Field::Str(get));
        self
    }

    pub fn str_set(mut self, name: &'static str, get: fn(&R) -> &[String]) -> Self {
        self.fields.insert(name, Field::StrSet(get));
        self
    }

    pub fn primary_key(&self) -> &'static str {
        self.primary_key
    }

    pub fn get(&self, name: &str) -> Option<&Field<R>> {
        self.fields.get(name)
    }

    /// Searchable field names, primary key first, then declaration order.
    pub fn names(&self) -> Vec<&'static str> {
        std::iter::once(self.primary_key)
            .chain(self.fields.keys().copied())
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        name == self.primary_key || self.fields.contains_key(name)
    }

    /// Kind of a non-primary-key field.
    pub fn kind_of(&self, name: &str) -> Option<FieldKind> {
        self.get(name).map(Field::kind)
    }

    /// Look up `name` and coerce `raw`; unknown names are `InvalidField`.
    pub fn criterion<'v>(&self, name: &str, raw: &'v str) -> DeskResult<Criterion<'v, R>> {
        self.get(name)
            .ok_or_else(|| DeskError::invalid_field(format!("key {name} is invalid")))?
            .criterion(name, raw)
    }
}

pub fn parse_int(name: &str, raw: &str) -> DeskResult<i64> {
    raw.parse::<i64>()
        .map_err(|err| {
            DeskError::invalid_value(format!("input {name} is invalid: {raw:?}")).with_source(err)
        })
}

pub fn parse_bool(name: &str, raw: &str) -> DeskResult<bool> {
    if raw.eq_ignore_ascii_case("true") {
        return Ok(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return Ok(false);
    }
    crate::bail_desk!(
        invalid_value,
        "input {} is invalid: {:?} is not true or false",
        name,
        raw
    );
}
