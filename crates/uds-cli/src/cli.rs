//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Generate the UDS section of haproxy.cfg and the UDS service config
#[derive(Parser, Debug)]
#[command(name = "uds-config")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file overriding the built-in paths and names
    #[arg(long, global = true, env = "UDS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run (defaults to `apply`)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Render and write the HAProxy section and the UDS service config
    Apply,

    /// Remove the HAProxy section and delete the UDS config directory
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delete() {
        let cli = Cli::try_parse_from(["uds-config", "delete"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Delete));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_no_command() {
        let cli = Cli::try_parse_from(["uds-config", "-v"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(cli.verbose);
    }

    #[test]
    fn test_commands_take_no_arguments() {
        assert!(Cli::try_parse_from(["uds-config", "apply", "extra"]).is_err());
    }
}
