use thiserror::Error;

/// All errors that can occur in pwvault.
#[derive(Debug, Error)]
pub enum VaultError {
    // --- Persistence pipeline errors ---
    #[error("Authentication failed: wrong password or corrupted vault")]
    Authentication,

    #[error("Malformed vault file: {len} bytes is shorter than the 28-byte minimum")]
    MalformedBlob { len: usize },

    #[error("Vault contents could not be decompressed: {0}")]
    Decode(String),

    #[error("Vault contents are not a valid service mapping: {0}")]
    Schema(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    // --- Serialization errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    Config(String),

    // --- CLI errors ---
    #[error("No entry for service '{0}'")]
    EntryNotFound(String),

    #[error("Cancelled by user")]
    UserCancelled,

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for pwvault results.
pub type Result<T> = std::result::Result<T, VaultError>;
