//! Service configuration
//!
//! All values come from the process environment (through the CLI layer).
//! The encryption key is mandatory: without it, previously stored secrets
//! could not be read back, so startup fails instead of inventing one.

use crate::crypto::{HashCost, SecretKey};
use crate::error::{Result, VaultError};
use crate::storage::StoreLocation;

/// Default store URI
pub const DEFAULT_STORE_URI: &str = "memory://";

/// Default database (collection) name
pub const DEFAULT_DB_NAME: &str = "passwords";

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Raw service configuration
#[derive(Clone)]
pub struct VaultConfig {
    /// Store connection string (`memory://` or `file://<dir>`)
    pub store_uri: String,
    /// Database / collection name
    pub db_name: String,
    /// HTTP listening port
    pub port: u16,
    /// Symmetric encryption key, as configured
    pub encryption_key: Option<String>,
    /// Cost parameters for the one-way hash
    pub hash_cost: HashCost,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            store_uri: DEFAULT_STORE_URI.to_string(),
            db_name: DEFAULT_DB_NAME.to_string(),
            port: DEFAULT_PORT,
            encryption_key: None,
            hash_cost: HashCost::default(),
        }
    }
}

impl VaultConfig {
    /// Check the configuration and parse the encryption key
    pub fn validate(&self) -> Result<SecretKey> {
        self.store_uri
            .parse::<StoreLocation>()
            .map_err(|e| VaultError::ConfigError(e.to_string()))?;

        if self.db_name.trim().is_empty() {
            return Err(VaultError::ConfigError("database name is empty".to_string()));
        }

        let key = self
            .encryption_key
            .as_deref()
            .ok_or_else(|| VaultError::ConfigError("ENCRYPTION_KEY is not set".to_string()))?;

        SecretKey::from_config(key)
    }
}

impl std::fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultConfig")
            .field("store_uri", &self.store_uri)
            .field("db_name", &self.db_name)
            .field("port", &self.port)
            .field("encryption_key", &self.encryption_key.as_ref().map(|_| "[REDACTED]"))
            .field("hash_cost", &self.hash_cost)
            .finish()
    }
}
