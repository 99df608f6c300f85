//! Application context shared by all handlers

use std::sync::Arc;

use vault_core::{HashCost, RecordStore, SecretKey};

/// Store handle and key material, built once at startup
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn RecordStore>,
    pub key: Arc<SecretKey>,
    pub hash_cost: HashCost,
}

impl AppContext {
    pub fn new(store: Arc<dyn RecordStore>, key: SecretKey) -> Self {
        Self {
            store,
            key: Arc::new(key),
            hash_cost: HashCost::default(),
        }
    }

    /// Override the one-way hash cost
    pub fn with_hash_cost(mut self, hash_cost: HashCost) -> Self {
        self.hash_cost = hash_cost;
        self
    }
}
