//! Error types for vault-core

use thiserror::Error;

/// Result type alias for vault operations
pub type Result<T> = std::result::Result<T, VaultError>;

/// Vault error types
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("Encryption failed: {0}")]
    EncryptionError(String),

    #[error("Hashing failed: {0}")]
    HashError(String),

    #[error("Invalid encryption key: {0}")]
    InvalidKey(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for record store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by record store backends
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Unsupported store URI: {0}")]
    UnsupportedUri(String),

    #[error("Invalid database name: {0}")]
    InvalidDbName(String),

    #[error("Store IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt collection file: {0}")]
    Corrupt(#[from] serde_json::Error),
}
