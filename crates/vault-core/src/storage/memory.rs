//! In-memory record store

use async_trait::async_trait;
use chrono::Utc;
use indexmap::IndexMap;
use tokio::sync::RwLock;
use tracing::debug;

use super::{DeleteResult, InsertResult, RecordStore};
use crate::error::StoreResult;
use crate::record::{NewRecord, Record, RecordId};

/// Volatile store; contents are lost when the process exits
#[derive(Default)]
pub struct MemoryRecordStore {
    records: RwLock<IndexMap<RecordId, Record>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn insert(&self, record: NewRecord) -> StoreResult<InsertResult> {
        let id = RecordId::generate();
        let record = record.into_record(id, Utc::now());

        self.records.write().await.insert(id, record);

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
        let removed = self.records.write().await.shift_remove(id).is_some();

        debug!("Delete record {}: matched={}", id, removed);
        Ok(DeleteResult {
            acknowledged: true,
            deleted_count: u64::from(removed),
        })
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.records.read().await.len())
    }

    fn backend_name(&self) -> &'static str {
        "In-Memory Store"
    }
}
