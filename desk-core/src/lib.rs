//! desk-core: record stores, field filtering and service plumbing for desk.

pub mod app;
pub mod config;
pub mod errors;
pub mod filter;
pub mod record;
pub mod registry;
pub mod service;
pub mod source;
pub mod store;

pub use app::DeskApp;
pub use config::{DeskConfig, DeskConfigSnapshot};
pub use errors::{DeskError, DeskResult, ErrorKind};
pub use filter::{Criterion, Field, FieldKind, FieldTable};
pub use record::Record;
pub use registry::ServiceRegistry;
pub use service::{FindParams, SearchService};
pub use source::{CollectionKind, DataSource, FileSource, MemorySource};
pub use store::{RecordStore, Snapshot};
