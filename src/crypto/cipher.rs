//! AES-256-GCM authenticated encryption.
//!
//! Each call to `seal` generates a fresh random 12-byte nonce and hands
//! it back next to the ciphertext; the caller decides where to store it.
//! No associated data is used.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use super::keys::DerivedKey;
use crate::errors::{Result, VaultError};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag appended to every ciphertext.
pub const TAG_LEN: usize = 16;

/// Output of `seal`: the nonce used and the ciphertext with its tag.
#[derive(Debug, Clone)]
pub struct Sealed {
    pub nonce: [u8; NONCE_LEN],
    pub ciphertext: Vec<u8>,
}

/// Encrypt and authenticate `plaintext` under `key`.
pub fn seal(key: &DerivedKey, plaintext: &[u8]) -> Result<Sealed> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| VaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| VaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    let mut nonce_bytes = [0u8; NONCE_LEN];
    nonce_bytes.copy_from_slice(&nonce);

    Ok(Sealed {
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Verify and decrypt data produced by `seal`.
///
/// Wrong key, tampering and truncation all surface as
/// `VaultError::Authentication`; nothing is returned unless the tag checks.
pub fn open(key: &DerivedKey, nonce: &[u8; NONCE_LEN], ciphertext: &[u8]) -> Result<Vec<u8>> {
    if ciphertext.len() < TAG_LEN {
        return Err(VaultError::Authentication);
    }

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| VaultError::Authentication)?;

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| VaultError::Authentication)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> DerivedKey {
        DerivedKey::new([byte; 32])
    }

    #[test]
    fn seal_open_roundtrip() {
        let k = key(0xAB);
        let sealed = seal(&k, b"github:alice:x1y2").unwrap();
        assert_eq!(sealed.ciphertext.len(), 17 + TAG_LEN);

        let plain = open(&k, &sealed.nonce, &sealed.ciphertext).unwrap();
        assert_eq!(plain, b"github:alice:x1y2");
    }

    #[test]
    fn every_seal_uses_a_new_nonce() {
        let k = key(0xCD);
        let a = seal(&k, b"same").unwrap();
        let b = seal(&k, b"same").unwrap();
        assert_ne!(a.nonce, b.nonce);
        assert_ne!(a.ciphertext, b.ciphertext);
    }

    #[test]
    fn wrong_key_is_rejected() {
        let sealed = seal(&key(0x11), b"secret").unwrap();
        let err = open(&key(0x22), &sealed.nonce, &sealed.ciphertext).unwrap_err();
        assert!(matches!(err, VaultError::Authentication));
    }

    #[test]
    fn flipped_tag_byte_is_rejected() {
        let k = key(0x33);
        let mut sealed = seal(&k, b"secret").unwrap();
        let last = sealed.ciphertext.len() - 1;
        sealed.ciphertext[last] ^= 0x01;
        let err = open(&k, &sealed.nonce, &sealed.ciphertext).unwrap_err();
        assert!(matches!(err, VaultError::Authentication));
    }

    #[test]
    fn truncated_ciphertext_is_rejected() {
        let k = key(0x44);
        let err = open(&k, &[0u8; NONCE_LEN], &[0u8; 5]).unwrap_err();
        assert!(matches!(err, VaultError::Authentication));
    }
}
