//! `pwvault get`: print the credential stored for a service.

use crate::cli::{load_settings, unlock, Cli};
use crate::errors::{Result, VaultError};

/// Execute the `get` command.
pub fn execute(cli: &Cli, service: &str) -> Result<()> {
    let settings = load_settings()?;
    let session = unlock(cli, &settings)?;

    let entry = session
        .repository()
        .get(service)
        .ok_or_else(|| VaultError::EntryNotFound(service.to_string()))?;

    println!("User: {}", entry.username);
    println!("Pass: {}", entry.secret);

    Ok(())
}
