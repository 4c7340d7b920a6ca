//! CLI module: Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{Result, VaultError};
use crate::vault::{Session, VaultStore};

/// Environment variable that supplies the master password non-interactively.
pub const PASSWORD_ENV: &str = "PWVAULT_PASSWORD";

/// pwvault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "pwvault",
    about = "Local encrypted password vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault file (default: vault.pwmanager, or `vault_file` in .pwvault.toml)
    #[arg(long, global = true, env = "PWVAULT_FILE")]
    pub vault: Option<PathBuf>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add a credential (overwrites an existing one)
    Add {
        /// Service name (e.g. github)
        service: String,
        /// Username (omit for interactive prompt)
        #[arg(short, long)]
        user: Option<String>,
        /// Store a freshly generated password instead of prompting
        #[arg(short, long)]
        generate: bool,
    },

    /// Show the username and password for a service
    Get {
        /// Service name
        service: String,
    },

    /// List all services
    List,

    /// Change the username and/or password of a service
    Modify {
        /// Service name
        service: String,
        /// New username
        #[arg(short, long)]
        user: Option<String>,
        /// New password (omit for interactive prompt)
        #[arg(short, long, conflicts_with = "generate")]
        secret: Option<String>,
        /// Replace the password with a freshly generated one
        #[arg(short, long)]
        generate: bool,
    },

    /// Delete a service
    Delete {
        /// Service name
        service: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Print a generated password (does not touch the vault)
    Generate,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load settings from the working directory.
pub fn load_settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Resolve the vault file path: `--vault` wins over the config file.
pub fn vault_path(cli: &Cli, settings: &Settings) -> Result<PathBuf> {
    match &cli.vault {
        Some(path) => Ok(path.clone()),
        None => {
            let cwd = std::env::current_dir()?;
            Ok(settings.vault_path(&cwd))
        }
    }
}

/// Unlock the vault for a command.
///
/// The password comes from `PWVAULT_PASSWORD` if set (one attempt),
/// otherwise from an interactive prompt. A vault that does not exist
/// yet asks for the new password twice. On a wrong password the prompt
/// is repeated up to `settings.password_attempts` times; the message
/// never says whether the password or the file is at fault.
pub fn unlock(cli: &Cli, settings: &Settings) -> Result<Session> {
    let store = VaultStore::new(vault_path(cli, settings)?);

    if let Some(pw) = password_from_env() {
        return Session::unlock(store, pw);
    }

    if !store.path().exists() {
        output::info(&format!(
            "No vault at {}, a new one will be created.",
            store.path().display()
        ));
        let password = prompt_new_password()?;
        return Session::unlock(store, password);
    }

    let mut attempt = 1;
    loop {
        let password = prompt_password()?;
        match Session::unlock(store.clone(), password) {
            Err(VaultError::Authentication) if attempt < settings.password_attempts => {
                output::warning("Wrong password or corrupted vault. Try again.");
                attempt += 1;
            }
            result => return result,
        }
    }
}

fn password_from_env() -> Option<Zeroizing<String>> {
    match std::env::var(PASSWORD_ENV) {
        Ok(pw) if !pw.is_empty() => Some(Zeroizing::new(pw)),
        _ => None,
    }
}

/// Prompt for the master password of an existing vault.
///
/// Returns `Zeroizing<String>` so the password is wiped from memory on drop.
pub fn prompt_password() -> Result<Zeroizing<String>> {
    let pw = dialoguer::Password::new()
        .with_prompt("Master password")
        .interact()
        .map_err(|e| prompt_error("password prompt", e))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for the master password of a new vault, with confirmation.
pub fn prompt_new_password() -> Result<Zeroizing<String>> {
    let pw = dialoguer::Password::new()
        .with_prompt("Choose master password")
        .with_confirmation(
            "Confirm master password",
            "Passwords do not match, try again",
        )
        .interact()
        .map_err(|e| prompt_error("password prompt", e))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a line of visible text.
///
/// With `allow_empty`, an empty answer is returned as `""`.
pub fn prompt_text(prompt: &str, allow_empty: bool) -> Result<String> {
    dialoguer::Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(allow_empty)
        .interact_text()
        .map_err(|e| prompt_error("input prompt", e))
}

/// Prompt for a hidden value such as a stored password.
pub fn prompt_secret(prompt: &str, allow_empty: bool) -> Result<String> {
    dialoguer::Password::new()
        .with_prompt(prompt)
        .allow_empty_password(allow_empty)
        .interact()
        .map_err(|e| prompt_error("input prompt", e))
}

/// Map a dialoguer failure to a `VaultError`.
///
/// Ctrl-C at a prompt surfaces as an interrupted read and becomes
/// `UserCancelled`; anything else is a `CommandFailed`.
pub fn prompt_error(what: &str, err: dialoguer::Error) -> VaultError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            VaultError::UserCancelled
        }
        other => VaultError::CommandFailed(format!("{what}: {other}")),
    }
}
