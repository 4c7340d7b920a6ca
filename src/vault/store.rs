//! Atomic persistence of the encrypted vault blob.
//!
//! `VaultStore` treats the blob as opaque bytes. Writes go to a temp
//! file in the same directory which is flushed to disk and then renamed
//! over the vault path, so the vault path always holds either the old
//! or the new blob in full.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::Result;

/// Reads and writes the vault file at a fixed path.
#[derive(Debug, Clone)]
pub struct VaultStore {
    path: PathBuf,
}

impl VaultStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the vault file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored blob.
    ///
    /// Returns `Ok(None)` when no vault file exists yet.
    pub fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(data) => {
                debug!(path = %self.path.display(), len = data.len(), "read vault file");
                Ok(Some(data))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no vault file");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Replace the stored blob atomically.
    pub fn write(&self, blob: &[u8]) -> Result<()> {
        self.stage(blob)?.commit()
    }

    /// First half of `write`: put `blob` on disk next to the vault file
    /// without touching the vault file itself.
    ///
    /// The returned `PendingWrite` must be committed to take effect;
    /// dropping it removes the temp file.
    pub fn stage(&self, blob: &[u8]) -> Result<PendingWrite> {
        let parent = self.parent_dir();
        fs::create_dir_all(parent)?;

        // Same directory as the target so the rename cannot cross filesystems.
        // On Unix the temp file, and so the vault after the rename, is 0600.
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(blob)?;
        tmp.as_file().sync_all()?;

        debug!(tmp = %tmp.path().display(), len = blob.len(), "staged vault write");
        Ok(PendingWrite {
            tmp,
            target: self.path.clone(),
        })
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

/// A fully written temp file waiting to be renamed over the vault path.
#[derive(Debug)]
pub struct PendingWrite {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl PendingWrite {
    /// Path of the staged temp file.
    pub fn temp_path(&self) -> &Path {
        self.tmp.path()
    }

    /// Second half of `write`: atomically rename the temp file over the
    /// vault path.
    pub fn commit(self) -> Result<()> {
        let target = self.target;
        self.tmp.persist(&target).map_err(|e| e.error)?;

        if let Some(parent) = target.parent() {
            sync_dir(parent);
        }
        debug!(path = %target.display(), "committed vault write");
        Ok(())
    }
}

/// Flush the directory entry for the rename. Best effort.
fn sync_dir(dir: &Path) {
    let dir = if dir.as_os_str().is_empty() {
        Path::new(".")
    } else {
        dir
    };

    #[cfg(unix)]
    {
        if let Err(err) = fs::File::open(dir).and_then(|d| d.sync_all()) {
            warn!(path = %dir.display(), error = %err, "directory sync failed");
        }
    }

    #[cfg(not(unix))]
    {
        let _ = dir;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("vault.pwmanager"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_then_read_returns_same_bytes() {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("vault.pwmanager"));
        store.write(b"first blob").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), b"first blob");

        store.write(b"second").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), b"second");
    }

    #[test]
    fn write_creates_missing_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("nested/deeper/vault.pwmanager"));
        store.write(b"blob").unwrap();
        assert_eq!(store.read().unwrap().unwrap(), b"blob");
    }

    #[test]
    fn uncommitted_write_leaves_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("vault.pwmanager"));
        store.write(b"previous").unwrap();

        let pending = store.stage(b"next").unwrap();
        assert!(pending.temp_path().exists());
        assert_eq!(store.read().unwrap().unwrap(), b"previous");

        let tmp = pending.temp_path().to_path_buf();
        drop(pending);
        assert!(!tmp.exists());
        assert_eq!(store.read().unwrap().unwrap(), b"previous");
    }

    #[test]
    fn no_temp_files_left_after_write() {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("vault.pwmanager"));
        store.write(b"blob").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("vault.pwmanager")]);
    }

    #[cfg(unix)]
    #[test]
    fn written_vault_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = VaultStore::new(dir.path().join("vault.pwmanager"));
        store.write(b"blob").unwrap();
        store.write(b"replaced").unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn read_error_other_than_missing_propagates() {
        let dir = TempDir::new().unwrap();
        // A directory at the vault path cannot be read as a file.
        let store = VaultStore::new(dir.path());
        assert!(store.read().is_err());
    }
}
