//! `pwvault generate`: print a random password.

use crate::cli::load_settings;
use crate::errors::Result;

/// Execute the `generate` command.
pub fn execute() -> Result<()> {
    let settings = load_settings()?;
    println!("{}", settings.generate_password());
    Ok(())
}
