//! `pwvault list`: display all services in a table.

use crate::cli::output;
use crate::cli::{load_settings, unlock, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings()?;
    let session = unlock(cli, &settings)?;

    output::info(&format!(
        "{} service(s) in {}",
        session.repository().len(),
        session.store().path().display()
    ));

    output::print_services_table(session.repository());

    Ok(())
}
