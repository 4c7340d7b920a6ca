//! `pwvault delete`: remove a service from the vault.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{load_settings, prompt_error, unlock, Cli};
use crate::errors::{Result, VaultError};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, service: &str, force: bool) -> Result<()> {
    let settings = load_settings()?;
    let mut session = unlock(cli, &settings)?;

    if !session.repository().contains(service) {
        return Err(VaultError::EntryNotFound(service.to_string()));
    }

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{service}'?"))
            .default(false)
            .interact()
            .map_err(|e| prompt_error("confirm prompt", e))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    session.repository_mut().delete(service);
    session.save()?;

    output::success(&format!("Deleted '{service}'"));

    Ok(())
}
