//! Store trait definitions

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::record::{NewRecord, Record, RecordId};

/// Outcome of an insert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: RecordId,
}

/// Outcome of a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Trait for record store backends
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a record, assigning its id and creation time
    async fn insert(&self, record: NewRecord) -> StoreResult<InsertResult>;

    /// Look up a record by id
    async fn find_one(&self, id: &RecordId) -> StoreResult<Option<Record>>;

    /// All records, oldest first
    async fn find_all(&self) -> StoreResult<Vec<Record>>;

    /// Remove a record by id; `deleted_count` is 0 when nothing matched
    async fn delete_one(&self, id: &RecordId) -> StoreResult<DeleteResult>;

    /// Number of stored records
    async fn count(&self) -> StoreResult<usize>;

    /// Get a human-readable name for this backend
    fn backend_name(&self) -> &'static str;
}
