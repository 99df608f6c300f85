//! JSON collection file store
//!
//! Keeps one collection per database name in `<dir>/<db_name>.json`.
//! The whole collection is held in memory and rewritten atomically after
//! every mutation.

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;
use tracing::debug;

use super::{DeleteResult, InsertResult, RecordStore};
use crate::error::{StoreError, StoreResult};
use crate::record::{NewRecord, Record, RecordId};

const FILE_VERSION: u32 = 1;

/// File format for a persisted collection
#[derive(Debug, Serialize, Deserialize)]
struct CollectionFile {
    version: u32,
    records: Vec<Record>,
}

/// Persistent store backed by a JSON file
pub struct FileRecordStore {
    path: PathBuf,
    records: RwLock<IndexMap<RecordId, Record>>,
}

impl FileRecordStore {
    /// Open (or create) the collection `db_name` under `dir`
    pub async fn open(dir: impl AsRef<Path>, db_name: &str) -> StoreResult<Self> {
        validate_db_name(db_name)?;

        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(format!("{}.json", db_name));

        let records = Self::load(&path).await?;
        debug!("Opened collection {:?} with {} records", path, records.len());

        Ok(Self {
            path,
            records: RwLock::new(records),
        })
    }

    /// Path of the collection file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(path: &Path) -> StoreResult<IndexMap<RecordId, Record>> {
        if !tokio::fs::try_exists(path).await? {
            debug!("No existing collection file found");
            return Ok(IndexMap::new());
        }

        let contents = tokio::fs::read_to_string(path).await?;
        let file: CollectionFile = serde_json::from_str(&contents)?;

        Ok(file.records.into_iter().map(|r| (r.id, r)).collect())
    }

    /// Write the collection to disk; called with the write lock held
    async fn save(&self, records: &IndexMap<RecordId, Record>) -> StoreResult<()> {
        let file = CollectionFile {
            version: FILE_VERSION,
            records: records.values().cloned().collect(),
        };
        let contents = serde_json::to_string_pretty(&file)?;

        // Write atomically using a temp file
        let temp_path = self.path.with_extension("tmp");
        tokio::fs::write(&temp_path, &contents).await?;
        tokio::fs::rename(&temp_path, &self.path).await?;

        debug!("Saved {} records to {:?}", records.len(), self.path);
        Ok(())
    }
}

fn validate_db_name(db_name: &str) -> StoreResult<()> {
    let valid = !db_name.is_empty()
        && db_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidDbName(db_name.to_string()))
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn insert(&self, record: NewRecord) -> StoreResult<InsertResult> {
        let id = RecordId::generate();
        let record = record.into_record(id, Utc::now());

        let mut records = self.records.write().await;
        records.insert(id, record);
        if let Err(e) = self.save(&records).await {
            records.shift_remove(&id);
            return Err(e);
        }

        debug!("Inserted record: {}", id);
        Ok(InsertResult {
            acknowledged: true,
            inserted_id: id,
        })
    }

    async fn find_one(&self, id: &RecordId) -> StoreResult<Option<Record>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Record>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn delete_one(&self, id: &RecordId) -> StoreResult<DeleteResult> {
        let mut records = self.records.write().await;

        let Some(index) = records.get_index_of(id) else {
            return Ok(DeleteResult {
                acknowledged: true,
                deleted_count: 0,
            });
        };

        let removed = records.shift_remove_index(index);
        if let Err(e) = self.save(&records).await {
            if let Some((id, record)) = removed {
                records.shift_insert(index, id, record);
            }
            return Err(e);
        }

        debug!("Deleted record: {}", id);
        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: 1,
        })
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.records.read().await.len())
    }

    fn backend_name(&self) -> &'static str {
        "JSON File Store"
    }
}
