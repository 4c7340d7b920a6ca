//! One unlocked vault: the repository plus the password that saves it.
//!
//! A `Session` is created by `unlock` and dropped when the caller is
//! done; the master password lives only inside it and is wiped on drop.

use tracing::info;
use zeroize::Zeroizing;

use crate::errors::Result;

use super::codec;
use super::repository::VaultRepository;
use super::store::VaultStore;

/// An unlocked vault bound to its backing file.
pub struct Session {
    store: VaultStore,
    password: Zeroizing<String>,
    repository: VaultRepository,
    is_new: bool,
}

impl Session {
    /// Unlock the vault at `store` with `password`.
    ///
    /// With no vault file the session starts from an empty vault;
    /// nothing is written until `save` is called.
    pub fn unlock(store: VaultStore, password: Zeroizing<String>) -> Result<Self> {
        let (repository, is_new) = match store.read()? {
            Some(blob) => (codec::decode(&blob, password.as_bytes())?, false),
            None => {
                info!(path = %store.path().display(), "no vault file, starting empty");
                (VaultRepository::new(), true)
            }
        };

        Ok(Self {
            store,
            password,
            repository,
            is_new,
        })
    }

    /// Encrypt the current repository and replace the vault file.
    pub fn save(&mut self) -> Result<()> {
        let blob = codec::encode(&self.repository, self.password.as_bytes())?;
        self.store.write(&blob)?;
        self.is_new = false;
        Ok(())
    }

    pub fn repository(&self) -> &VaultRepository {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut VaultRepository {
        &mut self.repository
    }

    /// `true` until the first successful save of a vault that had no file.
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    pub fn store(&self) -> &VaultStore {
        &self.store
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("path", &self.store.path())
            .field("entries", &self.repository.len())
            .field("is_new", &self.is_new)
            .finish_non_exhaustive()
    }
}
