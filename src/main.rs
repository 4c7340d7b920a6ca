use clap::Parser;
use pwvault::cli::{Cli, Commands};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the tracing filter (e.g. `pwvault=debug`).
const LOG_ENV: &str = "PWVAULT_LOG";

fn init_logging() {
    // stdout carries command output, so logs go to stderr.
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .with(filter)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add {
            ref service,
            ref user,
            generate,
        } => pwvault::cli::commands::add::execute(&cli, service, user.as_deref(), generate),
        Commands::Get { ref service } => pwvault::cli::commands::get::execute(&cli, service),
        Commands::List => pwvault::cli::commands::list::execute(&cli),
        Commands::Modify {
            ref service,
            ref user,
            ref secret,
            generate,
        } => pwvault::cli::commands::modify::execute(
            &cli,
            service,
            user.as_deref(),
            secret.as_deref(),
            generate,
        ),
        Commands::Delete { ref service, force } => {
            pwvault::cli::commands::delete::execute(&cli, service, force)
        }
        Commands::Generate => pwvault::cli::commands::generate::execute(),
    };

    if let Err(e) = result {
        pwvault::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
