//! modelver command-line client.
//!
//! Loads two version maps from JSON files and prints either their
//! comparison or the model version delta between them.

mod commands;
mod config;
mod error;
mod formatter;
mod loader;

use clap::Parser;
use config::{Args, DEFAULT_LOG_FILTER};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .init();

    let args = Args::parse();
    let formatter = formatter::create_formatter(args.format);

    match commands::execute(&args.command, &*formatter) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            let code = e.exit_code();
            if code == 2 {
                tracing::error!(error = %e, "internal consistency failure in version comparison");
            } else {
                tracing::debug!(error = ?e, "command failed");
            }
            eprintln!("{}", formatter.format_error(&e.to_string()));
            std::process::exit(code);
        }
    }
}
