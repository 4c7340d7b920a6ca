//! `pwvault modify`: partially update a credential.
//!
//! Fields that are not given (or answered with an empty line at the
//! prompt) keep their current value.

use crate::cli::output;
use crate::cli::{load_settings, prompt_secret, prompt_text, unlock, Cli};
use crate::errors::{Result, VaultError};

/// Execute the `modify` command.
pub fn execute(
    cli: &Cli,
    service: &str,
    user: Option<&str>,
    secret: Option<&str>,
    generate: bool,
) -> Result<()> {
    let settings = load_settings()?;
    let mut session = unlock(cli, &settings)?;

    if !session.repository().contains(service) {
        return Err(VaultError::EntryNotFound(service.to_string()));
    }

    // With no flags at all, ask for both fields interactively.
    let interactive = user.is_none() && secret.is_none() && !generate;

    let new_user = match user {
        Some(u) => Some(u.to_string()),
        None if interactive => Some(prompt_text("New username (empty to keep)", true)?),
        None => None,
    }
    .filter(|u| !u.is_empty());

    let new_secret = if generate {
        Some(settings.generate_password())
    } else if let Some(s) = secret {
        output::warning("Password provided on command line; it may appear in shell history.");
        Some(s.to_string())
    } else if interactive {
        Some(prompt_secret("New password (empty to keep)", true)?)
    } else {
        None
    }
    .filter(|s| !s.is_empty());

    if new_user.is_none() && new_secret.is_none() {
        output::info(&format!("Nothing to change for '{service}'"));
        return Ok(());
    }

    session
        .repository_mut()
        .modify(service, new_user.as_deref(), new_secret.as_deref());
    session.save()?;

    output::success(&format!("Updated '{service}'"));
    if generate {
        if let Some(pw) = &new_secret {
            output::info(&format!("Generated password: {pw}"));
        }
    }

    Ok(())
}
