//! The credential stored for one service.
//!
//! Serde field names are the `user` / `pass` keys of the exchange form
//! and must not change: existing vault files depend on them.

use serde::{Deserialize, Serialize};

/// Username and secret for a single service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialEntry {
    #[serde(rename = "user")]
    pub username: String,

    #[serde(rename = "pass")]
    pub secret: String,
}

impl CredentialEntry {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }
}

impl std::fmt::Debug for CredentialEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialEntry")
            .field("username", &self.username)
            .field("secret", &"***")
            .finish()
    }
}
