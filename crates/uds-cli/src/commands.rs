//! Command implementations

use colored::Colorize;
use uds_core::{Settings, UdsConfigGenerator};

use crate::error::Result;

/// Render and write both managed files.
pub fn run_apply(settings: Settings) -> Result<()> {
    let source = settings.salt.client();
    let haproxy = settings.haproxy.config_path.clone();
    let uds = settings.uds.config_path();

    UdsConfigGenerator::new(settings, source).apply()?;

    println!("{} {}", "Updated".green().bold(), haproxy.display());
    println!("{} {}", "Wrote".green().bold(), uds.display());
    Ok(())
}

/// Remove the managed block and the UDS config directory.
pub fn run_delete(settings: Settings) -> Result<()> {
    let source = settings.salt.client();
    let haproxy = settings.haproxy.config_path.clone();
    let uds_dir = settings.uds.config_dir();

    UdsConfigGenerator::new(settings, source).delete()?;

    println!("{} UDS section from {}", "Removed".yellow().bold(), haproxy.display());
    println!("{} {}", "Removed".yellow().bold(), uds_dir.display());
    Ok(())
}
