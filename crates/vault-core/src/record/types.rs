//! Record type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::crypto::{decrypt, SecretKey};
use crate::error::StoreError;

/// Store-generated record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generate a fresh identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for RecordId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| StoreError::InvalidId(s.to_string()))
    }
}

/// A stored site/username/secret entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Unique identifier, assigned by the store
    #[serde(rename = "_id")]
    pub id: RecordId,

    /// Site the credentials belong to
    pub site: String,

    /// Login name on the site
    pub username: String,

    /// Salted one-way hash of the secret (PHC string)
    pub hashed_secret: String,

    /// Reversible `iv:ciphertext` token
    pub encrypted_secret: String,

    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl Record {
    /// Build the display form, decrypting the secret.
    ///
    /// The hash and token never leave this type; a token that fails to
    /// decrypt shows as an empty password.
    pub fn to_view(&self, key: &SecretKey) -> RecordView {
        RecordView {
            id: self.id,
            site: self.site.clone(),
            username: self.username.clone(),
            password: decrypt(&self.encrypted_secret, key).into_display(),
            created_at: self.created_at,
        }
    }
}

/// Record contents as handed to the store; id and timestamp are filled in on insert
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub site: String,
    pub username: String,
    pub hashed_secret: String,
    pub encrypted_secret: String,
}

impl NewRecord {
    /// Materialize into a full record
    pub fn into_record(self, id: RecordId, created_at: DateTime<Utc>) -> Record {
        Record {
            id,
            site: self.site,
            username: self.username,
            hashed_secret: self.hashed_secret,
            encrypted_secret: self.encrypted_secret,
            created_at,
        }
    }
}

/// Record as returned to API callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordView {
    #[serde(rename = "_id")]
    pub id: RecordId,
    pub site: String,
    pub username: String,
    /// Decrypted secret, or empty if it could not be recovered
    pub password: String,
    pub created_at: DateTime<Utc>,
}
