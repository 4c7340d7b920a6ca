//! zstd compression of the serialized vault, applied before encryption.

use crate::errors::{Result, VaultError};

/// zstd level used for vault contents. Vaults are small, so favour ratio.
const LEVEL: i32 = 9;

/// Compress UTF-8 text into a zstd frame.
pub fn compress(text: &str) -> Result<Vec<u8>> {
    zstd::encode_all(text.as_bytes(), LEVEL)
        .map_err(|e| VaultError::Serialization(format!("zstd compress: {e}")))
}

/// Decompress a zstd frame back into the original text.
///
/// Anything that is not a valid frame, or that inflates to invalid
/// UTF-8, is a `VaultError::Decode`.
pub fn decompress(bytes: &[u8]) -> Result<String> {
    let raw = zstd::decode_all(bytes).map_err(|e| VaultError::Decode(format!("zstd: {e}")))?;
    String::from_utf8(raw).map_err(|_| VaultError::Decode("content is not valid UTF-8".into()))
}
