//! `pwvault add`: add or overwrite a credential.

use crate::cli::output;
use crate::cli::{load_settings, prompt_secret, prompt_text, unlock, Cli};
use crate::errors::Result;

/// Execute the `add` command.
pub fn execute(cli: &Cli, service: &str, user: Option<&str>, generate: bool) -> Result<()> {
    let settings = load_settings()?;
    let mut session = unlock(cli, &settings)?;

    let username = match user {
        Some(u) => u.to_string(),
        None => prompt_text("Username", false)?,
    };

    let secret = if generate {
        settings.generate_password()
    } else {
        prompt_secret(&format!("Password for {service}"), false)?
    };

    let existed = session.repository().contains(service);
    session.repository_mut().add(service, &username, &secret);
    session.save()?;

    if existed {
        output::success(&format!("Updated '{service}'"));
    } else {
        output::success(&format!(
            "Added '{service}' ({} total)",
            session.repository().len()
        ));
    }

    if generate {
        output::info(&format!("Generated password: {secret}"));
    }

    Ok(())
}
