//! Colored terminal output helpers.
//!
//! Every command prints through these helpers: one-line messages with a
//! status mark, and the services table for `list`.

use comfy_table::{ContentArrangement, Table};
use console::{style, StyledObject};

use crate::vault::VaultRepository;

/// Leading mark of a one-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Success,
    Failure,
    Warning,
    Info,
    Tip,
}

impl Mark {
    fn styled(self) -> StyledObject<&'static str> {
        match self {
            Mark::Success => style("\u{2713}").green().bold(),
            Mark::Failure => style("\u{2717}").red().bold(),
            Mark::Warning => style("\u{26a0}").yellow().bold(),
            Mark::Info => style("\u{2139}").blue().bold(),
            Mark::Tip => style("\u{2192}").dim(),
        }
    }
}

fn render(mark: Mark, msg: &str) -> String {
    match mark {
        Mark::Tip => format!("{} {}", mark.styled(), style(msg).dim()),
        _ => format!("{} {msg}", mark.styled()),
    }
}

/// Command result on stdout.
pub fn success(msg: &str) {
    println!("{}", render(Mark::Success, msg));
}

/// Fatal error on stderr; `main` exits 1 afterwards.
pub fn error(msg: &str) {
    eprintln!("{}", render(Mark::Failure, msg));
}

/// Non-fatal problem on stderr, so it never mixes with a printed secret.
pub fn warning(msg: &str) {
    eprintln!("{}", render(Mark::Warning, msg));
}

pub fn info(msg: &str) {
    println!("{}", render(Mark::Info, msg));
}

/// Dimmed hint shown after an empty listing.
pub fn tip(msg: &str) {
    println!("{}", render(Mark::Tip, msg));
}

/// Print a table of services and usernames. Passwords are never shown here.
pub fn print_services_table(vault: &VaultRepository) {
    if vault.is_empty() {
        info("No services in this vault yet.");
        tip("Run `pwvault add <SERVICE>` to add your first credential.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Service", "Username"]);

    for (service, entry) in vault.iter() {
        table.add_row(vec![service, entry.username.as_str()]);
    }

    println!("{table}");
}
