//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Mansion - explore the house, collect clues, accuse the culprit.
#[derive(Debug, Parser)]
#[command(name = "mansion")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MANSION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Narrated text (default)
    Table,
    /// JSON report
    Json,
    /// Verdict only
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Explore the mansion and make an accusation (default)
    Play(PlayArgs),

    /// Show the mansion layout
    Map,

    /// List the people who can be accused
    Suspects,
}

/// Arguments for the play command.
#[derive(Debug, Default, Args)]
pub struct PlayArgs {
    /// Read commands from a file instead of the keyboard ("-" for stdin)
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Accuse this suspect instead of asking at the end
    #[arg(short, long)]
    pub accuse: Option<String>,

    /// Override when clues are recorded again
    #[arg(long, value_enum)]
    pub discovery: Option<DiscoveryArg>,
}

/// Discovery argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum DiscoveryArg {
    /// Record a room's clue on the first visit only
    FirstVisit,
    /// Record it on every step spent in the room
    EveryVisit,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<DiscoveryArg> for crate::config::Discovery {
    fn from(arg: DiscoveryArg) -> Self {
        match arg {
            DiscoveryArg::FirstVisit => crate::config::Discovery::FirstVisit,
            DiscoveryArg::EveryVisit => crate::config::Discovery::EveryVisit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Discovery, OutputFormat};

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["mansion"]);
        assert!(cli.command.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_play_command() {
        let cli = Cli::parse_from([
            "mansion",
            "play",
            "--script",
            "moves.txt",
            "--accuse",
            "Elisa",
            "--discovery",
            "every-visit",
        ]);
        match cli.command {
            Some(Command::Play(args)) => {
                assert_eq!(args.script, Some(PathBuf::from("moves.txt")));
                assert_eq!(args.accuse.as_deref(), Some("Elisa"));
                assert!(matches!(args.discovery, Some(DiscoveryArg::EveryVisit)));
            }
            _ => panic!("Expected Play command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["mansion", "map", "--format", "json", "--no-color"]);
        assert!(matches!(cli.command, Some(Command::Map)));
        assert!(cli.no_color);
        let format: OutputFormat = cli.format.unwrap().into();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_discovery_conversion() {
        let discovery: Discovery = DiscoveryArg::FirstVisit.into();
        assert_eq!(discovery, Discovery::FirstVisit);
    }
}
