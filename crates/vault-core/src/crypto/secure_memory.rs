//! Key material with automatic zeroization

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, VaultError};

/// Length of the AES-256 key in bytes
pub const KEY_LEN: usize = 32;

/// Symmetric encryption key - automatically zeroed when dropped
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    key: [u8; KEY_LEN],
}

impl SecretKey {
    /// Create a key from raw bytes
    pub fn new(key: [u8; KEY_LEN]) -> Self {
        Self { key }
    }

    /// Get the key bytes (use carefully - avoid copying)
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    /// Create from a slice (must be exactly 32 bytes)
    pub fn from_slice(slice: &[u8]) -> Option<Self> {
        if slice.len() != KEY_LEN {
            return None;
        }
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(slice);
        Some(Self { key })
    }

    /// Parse a key from its configuration form.
    ///
    /// Accepts either 64 hex characters, or exactly 32 raw bytes. The raw
    /// form is what older deployments put in `ENCRYPTION_KEY`, and tokens
    /// they wrote stay readable with it. Raw keys are used byte for byte,
    /// surrounding whitespace included; only the hex form is trimmed.
    pub fn from_config(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(VaultError::InvalidKey("key is empty".to_string()));
        }

        let trimmed = value.trim();
        if trimmed.len() == KEY_LEN * 2 && trimmed.bytes().all(|b| b.is_ascii_hexdigit()) {
            let mut bytes = hex::decode(trimmed)
                .map_err(|e| VaultError::InvalidKey(format!("invalid hex: {}", e)))?;
            let key = Self::from_slice(&bytes);
            bytes.zeroize();
            return key.ok_or_else(|| VaultError::InvalidKey("decoded key has wrong length".to_string()));
        }

        Self::from_slice(value.as_bytes()).ok_or_else(|| {
            VaultError::InvalidKey(format!(
                "expected {} hex characters or {} bytes, got {} bytes",
                KEY_LEN * 2,
                KEY_LEN,
                value.len()
            ))
        })
    }
}

impl Clone for SecretKey {
    fn clone(&self) -> Self {
        Self { key: self.key }
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let bytes = [42u8; 32];
        let key = SecretKey::from_slice(&bytes).unwrap();
        assert_eq!(key.as_bytes(), &bytes);
    }

    #[test]
    fn test_from_invalid_slice() {
        let bytes = [42u8; 16];
        assert!(SecretKey::from_slice(&bytes).is_none());
    }

    #[test]
    fn test_from_config_hex() {
        let hex_key = "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff";
        let key = SecretKey::from_config(hex_key).unwrap();
        assert_eq!(key.as_bytes()[1], 0x11);
        assert_eq!(key.as_bytes()[31], 0xff);
    }

    #[test]
    fn test_from_config_raw() {
        let raw = "abcdefghijklmnopqrstuvwxyz012345";
        let key = SecretKey::from_config(raw).unwrap();
        assert_eq!(key.as_bytes(), raw.as_bytes());
    }

    #[test]
    fn test_from_config_raw_keeps_whitespace() {
        let raw = " bcdefghijklmnopqrstuvwxyz01234 ";
        let key = SecretKey::from_config(raw).unwrap();
        assert_eq!(key.as_bytes(), raw.as_bytes());

        // Trimming would leave 30 bytes, which is not a key
        assert!(SecretKey::from_config(raw.trim()).is_err());
    }

    #[test]
    fn test_from_config_hex_is_trimmed() {
        let hex_key = format!("  {}\n", "ab".repeat(32));
        let key = SecretKey::from_config(&hex_key).unwrap();
        assert_eq!(key.as_bytes(), &[0xab; 32]);
    }

    #[test]
    fn test_from_config_rejects_bad_lengths() {
        assert!(SecretKey::from_config("").is_err());
        assert!(SecretKey::from_config("too-short").is_err());
        assert!(SecretKey::from_config(&"a".repeat(33)).is_err());
        assert!(SecretKey::from_config(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn test_debug_redacted() {
        let key = SecretKey::new([7u8; 32]);
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains('7'));
    }
}
