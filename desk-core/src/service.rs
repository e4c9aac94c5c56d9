use serde::Serialize;
use serde_json::Value;

use crate::errors::{DeskError, DeskResult};
use crate::source::CollectionKind;

/// A single exact-match filter: `field == value`, value still raw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindParams {
    pub field: String,
    pub value: String,
}

impl FindParams {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Core desk service trait.
///
/// A service owns one collection's view: it filters that collection and
/// decorates every match with fields joined from the other collections.
/// Results come back as JSON so any presentation layer (CLI, HTTP, ...)
/// can render them without knowing the concrete view type.
pub trait SearchService: Send + Sync {
    /// Collection the base filter runs against.
    fn collection(&self) -> CollectionKind;

    /// Field names accepted by [`find`](Self::find), primary key first.
    fn fields(&self) -> Vec<&'static str>;

    /// Filter and enrich. Order follows the base collection.
    fn find(&self, params: &FindParams) -> DeskResult<Vec<Value>>;
}

/// Render typed views as JSON values for [`SearchService::find`].
pub fn to_values<T: Serialize>(items: &[T]) -> DeskResult<Vec<Value>> {
    items
        .iter()
        .map(|item| {
            serde_json::to_value(item)
                .map_err(|err| {
                    DeskError::general_error("cannot render result").with_source(err)
                })
        })
        .collect()
}
