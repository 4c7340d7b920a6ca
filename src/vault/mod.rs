//! Vault module: the persistence pipeline and the in-memory vault.
//!
//! This module provides:
//! - `CredentialEntry` (`entry`)
//! - `VaultRepository`, the decrypted service map (`repository`)
//! - zstd compression of the serialized vault (`compress`)
//! - The `salt || nonce || ciphertext` blob layout and encode/decode (`codec`)
//! - Atomic file persistence of the blob (`store`)
//! - The unlock/save lifecycle (`session`)

pub mod codec;
pub mod compress;
pub mod entry;
pub mod repository;
pub mod session;
pub mod store;

// Re-export the most commonly used items.
pub use codec::{decode, encode};
pub use entry::CredentialEntry;
pub use repository::VaultRepository;
pub use session::Session;
pub use store::{PendingWrite, VaultStore};
