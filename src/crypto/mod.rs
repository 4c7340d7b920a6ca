//! Cryptographic primitives for pwvault.
//!
//! This module provides:
//! - AES-256-GCM sealing and opening (`cipher`)
//! - PBKDF2-HMAC-SHA256 password-based key derivation (`kdf`)
//! - The zeroize-on-drop `DerivedKey` holder (`keys`)

pub mod cipher;
pub mod kdf;
pub mod keys;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, derive_key, ...};
pub use cipher::{open, seal, Sealed, NONCE_LEN, TAG_LEN};
pub use kdf::{derive_key, generate_salt, ITERATIONS, SALT_LEN};
pub use keys::{DerivedKey, KEY_LEN};
