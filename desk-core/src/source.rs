//! Byte sources feeding the record stores.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

use crate::config::{DeskConfigSnapshot, DATA_ORGANIZATIONS, DATA_TICKETS, DATA_USERS};
use crate::errors::{DeskError, DeskResult};

/// The three collections a desk snapshot is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Users,
    Organizations,
    Tickets,
}

impl CollectionKind {
    pub const ALL: [CollectionKind; 3] = [
        CollectionKind::Users,
        CollectionKind::Organizations,
        CollectionKind::Tickets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionKind::Users => "users",
            CollectionKind::Organizations => "organizations",
            CollectionKind::Tickets => "tickets",
        }
    }

    /// Config key holding the snapshot path for this collection.
    pub fn config_key(&self) -> &'static str {
        match self {
            CollectionKind::Users => DATA_USERS,
            CollectionKind::Organizations => DATA_ORGANIZATIONS,
            CollectionKind::Tickets => DATA_TICKETS,
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can hand over the raw JSON array for a collection.
pub trait DataSource: Send + Sync {
    fn load_bytes(&self, kind: CollectionKind) -> DeskResult<Vec<u8>>;
}

/// Reads each collection from a file on disk.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    paths: HashMap<CollectionKind, PathBuf>,
}

impl FileSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, kind: CollectionKind, path: impl Into<PathBuf>) -> Self {
        self.paths.insert(kind, path.into());
        self
    }

    /// Resolve every collection path from `data.*` config keys.
    pub fn from_config(config: &DeskConfigSnapshot) -> Self {
        let mut source = Self::new();
        for kind in CollectionKind::ALL {
            if let Some(path) = config.get(kind.config_key()) {
                source = source.with_path(kind, path);
            }
        }
        source
    }

    pub fn path(&self, kind: CollectionKind) -> Option<&PathBuf> {
        self.paths.get(&kind)
    }
}

impl DataSource for FileSource {
    fn load_bytes(&self, kind: CollectionKind) -> DeskResult<Vec<u8>> {
        let path = self.paths.get(&kind).ok_or_else(|| {
            DeskError::source_unavailable(format!(
                "no path configured for {kind} (set {})",
                kind.config_key()
            ))
        })?;

        std::fs::read(path).map_err(|err| {
            DeskError::source_unavailable(format!(
                "cannot load data from json file {}",
                path.display()
            ))
            .with_source(err)
        })
    }
}

/// Holds payloads in memory; handy for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    payloads: HashMap<CollectionKind, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: CollectionKind, bytes: impl Into<Vec<u8>>) -> Self {
        self.payloads.insert(kind, bytes.into());
        self
    }
}

impl DataSource for MemorySource {
    fn load_bytes(&self, kind: CollectionKind) -> DeskResult<Vec<u8>> {
        self.payloads
            .get(&kind)
            .cloned()
            .ok_or_else(|| DeskError::source_unavailable(format!("no payload for {kind}")))
    }
}
