//! Store selection from a connection string

use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use super::{FileRecordStore, MemoryRecordStore, RecordStore};
use crate::error::{StoreError, StoreResult};

const MEMORY_SCHEME: &str = "memory://";
const FILE_SCHEME: &str = "file://";

/// Where records live, parsed from a store URI
///
/// - `memory://` keeps records in process memory
/// - `file://<dir>` or a bare `<dir>` keeps a JSON collection per database
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

impl FromStr for StoreLocation {
    type Err = StoreError;

    fn from_str(uri: &str) -> Result<Self, Self::Err> {
        let uri = uri.trim();

        if uri == MEMORY_SCHEME || uri == "memory:" || uri == "memory" {
            return Ok(Self::Memory);
        }

        let path = uri.strip_prefix(FILE_SCHEME).unwrap_or(uri);
        if path.is_empty() || path.contains("://") {
            return Err(StoreError::UnsupportedUri(uri.to_string()));
        }

        Ok(Self::File(PathBuf::from(path)))
    }
}

/// Open the store named by `uri`, using `db_name` as the collection name
///
/// Called once at startup; the returned handle is shared by all requests.
pub async fn open_store(uri: &str, db_name: &str) -> StoreResult<Arc<dyn RecordStore>> {
    let store: Arc<dyn RecordStore> = match uri.parse::<StoreLocation>()? {
        StoreLocation::Memory => Arc::new(MemoryRecordStore::new()),
        StoreLocation::File(dir) => Arc::new(FileRecordStore::open(dir, db_name).await?),
    };

    info!("Store connected: {} ({})", store.backend_name(), db_name);
    Ok(store)
}
