//! tablepick CLI - render or pick rows from CSV data

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use tablepick::{command, ErrorKind, FixSuggestion, Options};

fn main() {
    // Logs go to stderr so stdout only ever carries table data. The picker
    // also draws on stderr and logs nothing while it holds the terminal.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Options::parse();

    if let Err(e) = command::run(&opts) {
        if e.kind() != ErrorKind::NoSelection {
            eprintln!("{} {}", "Error:".red().bold(), e);
            if let Some(suggestion) = e.fix_suggestion() {
                eprintln!("  {} {}", "Fix:".yellow(), suggestion);
            }
        }
        std::process::exit(e.exit_code());
    }
}
