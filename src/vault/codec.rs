//! Vault file byte layout and the encode/decode pipeline.
//!
//! A vault file has this layout:
//!
//! ```text
//! [salt: 16 bytes][nonce: 12 bytes][AES-256-GCM ciphertext + 16-byte tag]
//! ```
//!
//! - **Salt**: fresh for every save, fed to PBKDF2 with the master password.
//! - **Nonce**: fresh for every save.
//! - **Ciphertext**: zstd-compressed exchange-form JSON, sealed under the
//!   derived key.
//!
//! There is no magic, version or length prefix; nothing in the file
//! describes the vault's shape.

use tracing::debug;

use crate::crypto::{self, NONCE_LEN, SALT_LEN};
use crate::errors::{Result, VaultError};

use super::compress;
use super::repository::VaultRepository;

/// Smallest well-formed blob: salt + nonce.
pub const MIN_BLOB_LEN: usize = SALT_LEN + NONCE_LEN;

/// Encrypt a vault under `password`.
///
/// 1. Serialize to exchange-form JSON.
/// 2. Compress.
/// 3. Derive a key from a fresh salt.
/// 4. Seal with a fresh nonce.
/// 5. Concatenate salt, nonce and ciphertext.
pub fn encode(vault: &VaultRepository, password: &[u8]) -> Result<Vec<u8>> {
    let json = vault.to_exchange_json()?;
    let compressed = compress::compress(&json)?;

    let salt = crypto::generate_salt();
    let key = crypto::derive_key(password, &salt);
    let sealed = crypto::seal(&key, &compressed)?;

    let mut blob = Vec::with_capacity(MIN_BLOB_LEN + sealed.ciphertext.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&sealed.nonce);
    blob.extend_from_slice(&sealed.ciphertext);

    debug!(
        entries = vault.len(),
        json_len = json.len(),
        compressed_len = compressed.len(),
        blob_len = blob.len(),
        "encoded vault"
    );
    Ok(blob)
}

/// Decrypt a vault blob with `password`.
///
/// Errors are reported per stage: `MalformedBlob` for a short file,
/// `Authentication` when the tag does not verify, `Decode` when the
/// plaintext does not decompress, `Schema` when it is not a vault.
pub fn decode(blob: &[u8], password: &[u8]) -> Result<VaultRepository> {
    let (salt, nonce, ciphertext) = split(blob)?;

    let key = crypto::derive_key(password, salt);
    let compressed = crypto::open(&key, nonce, ciphertext)?;
    let json = compress::decompress(&compressed)?;
    let vault = VaultRepository::from_exchange_json(&json)?;

    debug!(entries = vault.len(), blob_len = blob.len(), "decoded vault");
    Ok(vault)
}

/// Split a blob into its salt, nonce and ciphertext sections.
fn split(blob: &[u8]) -> Result<(&[u8; SALT_LEN], &[u8; NONCE_LEN], &[u8])> {
    if blob.len() < MIN_BLOB_LEN {
        return Err(VaultError::MalformedBlob { len: blob.len() });
    }

    let (salt, rest) = blob.split_at(SALT_LEN);
    let (nonce, ciphertext) = rest.split_at(NONCE_LEN);

    let salt = salt
        .try_into()
        .map_err(|_| VaultError::MalformedBlob { len: blob.len() })?;
    let nonce = nonce
        .try_into()
        .map_err(|_| VaultError::MalformedBlob { len: blob.len() })?;

    Ok((salt, nonce, ciphertext))
}
