//! UDS config generator CLI
//!
//! Writes the UDS section of `haproxy.cfg` and the UDS service config from
//! cluster facts held in Salt, or removes both again.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;
use uds_core::Settings;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let settings = Settings::load_or_default(cli.config.as_deref())?;

    match cli.command.unwrap_or(Commands::Apply) {
        Commands::Apply => commands::run_apply(settings),
        Commands::Delete => commands::run_delete(settings),
    }
}
