use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::errors::{DeskError, DeskResult};
use crate::record::Record;
use crate::source::DataSource;

/// One loaded generation of a collection: the rows in file order and a
/// primary key index into them. Never mutated once built.
pub struct Snapshot<R: Record> {
    records: Vec<Arc<R>>,
    index: HashMap<R::Key, usize>,
}

impl<R: Record> Snapshot<R> {
    fn build(records: Vec<R>) -> DeskResult<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            let key = record.key();
            if index.insert(key.clone(), pos).is_some() {
                return Err(DeskError::malformed_payload(format!(
                    "duplicate {} primary key {key}",
                    R::KIND
                )));
            }
        }

        Ok(Self {
            records: records.into_iter().map(Arc::new).collect(),
            index,
        })
    }

    pub fn records(&self) -> &[Arc<R>] {
        &self.records
    }

    pub fn get(&self, key: &R::Key) -> Option<&Arc<R>> {
        self.index.get(key).map(|&pos| &self.records[pos])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// In-memory collection of one record type.
///
/// A load parses the whole payload and builds the index before publishing
/// it; readers grab the current snapshot `Arc` and never see the rows of
/// one load paired with the index of another.
pub struct RecordStore<R: Record> {
    current: RwLock<Option<Arc<Snapshot<R>>>>,
}

impl<R: Record> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> {
    /// An unset store. It answers every read as empty until a load succeeds.
    pub fn new() -> Self {
        Self {
            current: RwLock::new(None),
        }
    }

    /// Replace the collection with the JSON array in `bytes`.
    ///
    /// On failure the previous snapshot (or the unset state) stays in place.
    pub fn load(&self, bytes: &[u8]) -> DeskResult<usize> {
        let parsed = serde_json::from_slice::<Vec<R>>(bytes)
            .map_err(|err| {
                DeskError::malformed_payload(format!(
                    "{} payload is not a JSON array of records",
                    R::KIND
                ))
                .with_source(err)
            })
            .and_then(Snapshot::build);

        let snapshot = match parsed {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!(collection = %R::KIND, error = %err, "load rejected");
                return Err(err);
            }
        };

        let count = snapshot.len();
        *self.current.write() = Some(Arc::new(snapshot));
        info!(collection = %R::KIND, count, "collection loaded");
        Ok(count)
    }

    /// Pull this collection's bytes from `source`, then [`load`](Self::load) them.
    pub fn load_from(&self, source: &dyn DataSource) -> DeskResult<usize> {
        let bytes = source.load_bytes(R::KIND).inspect_err(|err| {
            warn!(collection = %R::KIND, error = %err, "source unavailable");
        })?;
        self.load(&bytes)
    }

    /// Publish whatever `other` currently holds, unset included.
    pub fn replace_from(&self, other: &RecordStore<R>) {
        let snapshot = other.snapshot();
        *self.current.write() = snapshot;
    }

    pub fn snapshot(&self) -> Option<Arc<Snapshot<R>>> {
        self.current.read().clone()
    }

    pub fn is_loaded(&self) -> bool {
        self.current.read().is_some()
    }

    pub fn len(&self) -> usize {
        self.snapshot().map_or(0, |s| s.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// O(1) primary key lookup. A missing key is `None`, not an error.
    pub fn retrieve(&self, key: &R::Key) -> Option<Arc<R>> {
        self.snapshot().and_then(|s| s.get(key).cloned())
    }

    /// The whole collection in load order.
    pub fn all(&self) -> Vec<Arc<R>> {
        self.snapshot()
            .map(|s| s.records().to_vec())
            .unwrap_or_default()
    }

    /// Every record whose `field` equals `raw` after coercion, in load order.
    ///
    /// The primary key field goes through the index instead of a scan.
    pub fn list(&self, field: &str, raw: &str) -> DeskResult<Vec<Arc<R>>> {
        let table = R::fields();
        let snapshot = self.snapshot();

        let found: Vec<Arc<R>> = if field == table.primary_key() {
            let key = parse_key::<R>(field, raw)?;
            snapshot
                .as_deref()
                .and_then(|s| s.get(&key).cloned())
                .into_iter()
                .collect()
        } else {
            let criterion = table.criterion(field, raw)?;
            snapshot
                .as_deref()
                .map(Snapshot::records)
                .unwrap_or_default()
                .iter()
                .filter(|r| criterion.matches(r))
                .cloned()
                .collect()
        };

        debug!(collection = %R::KIND, field, value = raw, matches = found.len(), "list");
        Ok(found)
    }

    /// [`list`](Self::list), mapped through `project`.
    pub fn project<T>(
        &self,
        field: &str,
        raw: &str,
        project: impl Fn(&R) -> T,
    ) -> DeskResult<Vec<T>> {
        Ok(self.list(field, raw)?.iter().map(|r| project(r)).collect())
    }
}

fn parse_key<R: Record>(field: &str, raw: &str) -> DeskResult<R::Key> {
    raw.parse::<R::Key>().map_err(|err| {
        DeskError::invalid_value(format!("input {field} is invalid: {raw:?}")).with_source(err)
    })
}
