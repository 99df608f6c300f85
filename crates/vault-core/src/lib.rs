//! # vault-core
//!
//! Core functionality for PassVault including:
//! - AES-256-CBC encryption of secrets at rest, in `iv:ciphertext` tokens
//! - Salted Argon2id one-way hashing
//! - Password records and the record store abstraction
//! - Password generation and strength rules

pub mod crypto;
pub mod error;
pub mod generator;
pub mod record;
pub mod settings;
pub mod storage;

pub use crypto::{decrypt, encrypt, hash_secret, verify_secret, DecryptFailure, DecryptOutcome, HashCost, SecretKey};
pub use error::{Result, StoreError, StoreResult, VaultError};
pub use generator::{check_strength, generate_password, StrengthIssue};
pub use record::{NewRecord, Record, RecordId, RecordView};
pub use settings::VaultConfig;
pub use storage::{open_store, DeleteResult, FileRecordStore, InsertResult, MemoryRecordStore, RecordStore, StoreLocation};
