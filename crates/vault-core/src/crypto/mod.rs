//! Cryptographic primitives for secrets at rest
//!
//! This module provides:
//! - AES-256-CBC reversible encryption in the `iv:ciphertext` token format
//! - Salted Argon2id one-way hashing of secrets
//! - Key material handling with zeroize

mod cipher;
mod hashing;
mod secure_memory;

pub use cipher::{decrypt, encrypt, DecryptFailure, DecryptOutcome, Token, IV_LEN};
pub use hashing::{hash_secret, verify_secret, HashCost};
pub use secure_memory::{SecretKey, KEY_LEN};
