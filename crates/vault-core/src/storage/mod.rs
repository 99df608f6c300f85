//! Record store backends
//!
//! This module provides two backends behind the [`RecordStore`] trait:
//! 1. In-memory (volatile, for tests and throwaway runs)
//! 2. JSON collection file (persistent)

mod traits;
mod memory;
mod file;
mod location;

pub use traits::{DeleteResult, InsertResult, RecordStore};
pub use memory::MemoryRecordStore;
pub use file::FileRecordStore;
pub use location::{open_store, StoreLocation};
