//! AES-256-CBC reversible encryption for stored secrets
//!
//! Token format: `{iv_hex}:{ciphertext_hex}`
//! - IV: 16 bytes, random per call
//! - Ciphertext: PKCS#7 padded, multiple of 16 bytes
//!
//! Decryption never returns an error to the caller. Every failure is
//! reported as a [`DecryptOutcome::Failed`] carrying the reason, and
//! displays as an empty string.

use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::RngCore;
use thiserror::Error;
use tracing::warn;

use super::SecretKey;
use crate::error::{Result, VaultError};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Initialization vector length in bytes
pub const IV_LEN: usize = 16;

const DELIMITER: char = ':';

/// Parsed `iv:ciphertext` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Initialization vector
    pub iv: [u8; IV_LEN],
    /// Encrypted, padded ciphertext
    pub ciphertext: Vec<u8>,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            hex::encode(self.iv),
            DELIMITER,
            hex::encode(&self.ciphertext)
        )
    }
}

impl Token {
    /// Parse from the format: `{iv_hex}:{ciphertext_hex}`
    pub fn parse(s: &str) -> std::result::Result<Self, DecryptFailure> {
        if s.is_empty() {
            return Err(DecryptFailure::Empty);
        }

        let (iv_hex, ciphertext_hex) = s
            .split_once(DELIMITER)
            .ok_or(DecryptFailure::MissingDelimiter)?;

        let iv_bytes = hex::decode(iv_hex).map_err(|_| DecryptFailure::InvalidHex)?;
        let ciphertext = hex::decode(ciphertext_hex).map_err(|_| DecryptFailure::InvalidHex)?;

        if iv_bytes.len() != IV_LEN {
            return Err(DecryptFailure::InvalidIvLength(iv_bytes.len()));
        }

        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&iv_bytes);

        Ok(Self { iv, ciphertext })
    }
}

/// Why a token could not be decrypted
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecryptFailure {
    #[error("token is empty")]
    Empty,

    #[error("token has no iv delimiter")]
    MissingDelimiter,

    #[error("token is not valid hex")]
    InvalidHex,

    #[error("invalid IV length: expected 16, got {0}")]
    InvalidIvLength(usize),

    #[error("cipher rejected the ciphertext")]
    Cipher,

    #[error("decrypted bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Result of decrypting a token
#[derive(Clone, PartialEq, Eq)]
pub enum DecryptOutcome {
    /// The recovered secret
    Plaintext(String),
    /// Decryption failed; the secret is unavailable
    Failed(DecryptFailure),
}

impl DecryptOutcome {
    /// Value shown to users: the plaintext, or an empty string on failure
    pub fn into_display(self) -> String {
        match self {
            Self::Plaintext(plaintext) => plaintext,
            Self::Failed(_) => String::new(),
        }
    }
}

impl std::fmt::Debug for DecryptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plaintext(_) => f.write_str("Plaintext([REDACTED])"),
            Self::Failed(reason) => f.debug_tuple("Failed").field(reason).finish(),
        }
    }
}

/// Encrypt a secret and return it as an `iv:ciphertext` token
pub fn encrypt(plaintext: &str, key: &SecretKey) -> Result<String> {
    let mut iv = [0u8; IV_LEN];
    rand::thread_rng().fill_bytes(&mut iv);

    let cipher = Aes256CbcEnc::new_from_slices(key.as_bytes(), &iv)
        .map_err(|e| VaultError::EncryptionError(e.to_string()))?;
    let ciphertext = cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext.as_bytes());

    Ok(Token { iv, ciphertext }.to_string())
}

/// Decrypt an `iv:ciphertext` token
///
/// Tokens that cannot be recovered produce `DecryptOutcome::Failed`;
/// the reason is logged here and nowhere else.
pub fn decrypt(token: &str, key: &SecretKey) -> DecryptOutcome {
    match try_decrypt(token, key) {
        Ok(plaintext) => DecryptOutcome::Plaintext(plaintext),
        Err(reason) => {
            warn!("Decryption failed: {}", reason);
            DecryptOutcome::Failed(reason)
        }
    }
}

fn try_decrypt(token: &str, key: &SecretKey) -> std::result::Result<String, DecryptFailure> {
    let token = Token::parse(token)?;

    let cipher = Aes256CbcDec::new_from_slices(key.as_bytes(), &token.iv)
        .map_err(|_| DecryptFailure::Cipher)?;
    let plaintext = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(&token.ciphertext)
        .map_err(|_| DecryptFailure::Cipher)?;

    String::from_utf8(plaintext).map_err(|_| DecryptFailure::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn test_key() -> SecretKey {
        let mut bytes = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut bytes);
        SecretKey::new(bytes)
    }

    fn is_lower_hex(s: &str) -> bool {
        s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = test_key();
        let token = encrypt("Secret123!", &key).unwrap();

        assert_eq!(decrypt(&token, &key), DecryptOutcome::Plaintext("Secret123!".to_string()));
    }

    #[test]
    fn test_roundtrip_printable_ascii_lengths() {
        let key = test_key();
        let mut rng = rand::thread_rng();

        for len in 1..=256 {
            let plaintext: String = (0..len).map(|_| rng.gen_range(0x20u8..=0x7e) as char).collect();
            let token = encrypt(&plaintext, &key).unwrap();
            assert_eq!(decrypt(&token, &key).into_display(), plaintext);
        }
    }

    #[test]
    fn test_token_format() {
        let key = test_key();

        for plaintext in ["a", "exactly16bytes!!", "a longer secret spanning blocks"] {
            let token = encrypt(plaintext, &key).unwrap();
            let (iv_hex, ciphertext_hex) = token.split_once(':').unwrap();

            assert_eq!(iv_hex.len(), 32);
            assert!(is_lower_hex(iv_hex));
            assert!(!ciphertext_hex.is_empty());
            assert!(is_lower_hex(ciphertext_hex));
            assert_eq!(ciphertext_hex.len() % 32, 0);
        }
    }

    #[test]
    fn test_different_ivs_produce_different_tokens() {
        let key = test_key();

        let token1 = encrypt("same plaintext", &key).unwrap();
        let token2 = encrypt("same plaintext", &key).unwrap();

        assert_ne!(&token1[..32], &token2[..32]);
        assert_ne!(token1, token2);
    }

    #[test]
    fn test_tampered_ciphertext_never_yields_plaintext() {
        let key = test_key();
        let plaintext = "Secret123!";
        let token = encrypt(plaintext, &key).unwrap();

        let delimiter = token.find(':').unwrap();
        for pos in (delimiter + 1)..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[pos] = if bytes[pos] == b'0' { b'1' } else { b'0' };
            let tampered = String::from_utf8(bytes).unwrap();

            let outcome = decrypt(&tampered, &key);
            assert_ne!(outcome, DecryptOutcome::Plaintext(plaintext.to_string()));
        }
    }

    #[test]
    fn test_wrong_key_fails() {
        let token = encrypt("secret data", &test_key()).unwrap();

        let outcome = decrypt(&token, &test_key());
        assert_ne!(outcome.into_display(), "secret data");
    }

    #[test]
    fn test_malformed_tokens() {
        let key = test_key();

        assert_eq!(decrypt("", &key), DecryptOutcome::Failed(DecryptFailure::Empty));
        assert_eq!(
            decrypt("not-a-token", &key),
            DecryptOutcome::Failed(DecryptFailure::MissingDelimiter)
        );
        assert_eq!(
            decrypt("zz:zz", &key),
            DecryptOutcome::Failed(DecryptFailure::InvalidHex)
        );
        assert_eq!(
            decrypt("abcd:abcd", &key),
            DecryptOutcome::Failed(DecryptFailure::InvalidIvLength(2))
        );
        assert_eq!(
            decrypt(&format!("{}:", "00".repeat(16)), &key),
            DecryptOutcome::Failed(DecryptFailure::Cipher)
        );
        assert_eq!(
            decrypt(&format!("{}:{}", "00".repeat(16), "ab".repeat(15)), &key),
            DecryptOutcome::Failed(DecryptFailure::Cipher)
        );
        assert_eq!(decrypt("not-a-token", &key).into_display(), "");
    }

    #[test]
    fn test_raw_config_key_roundtrip() {
        let key = SecretKey::from_config("abcdefghijklmnopqrstuvwxyz012345").unwrap();
        let token = encrypt("raw", &key).unwrap();

        let reparsed = Token::parse(&token).unwrap();
        assert_eq!(reparsed.to_string(), token);
        assert_eq!(decrypt(&token, &key).into_display(), "raw");
    }

    #[test]
    fn test_outcome_debug_redacts_plaintext() {
        let debug = format!("{:?}", DecryptOutcome::Plaintext("hunter2".to_string()));
        assert!(!debug.contains("hunter2"));
    }
}
