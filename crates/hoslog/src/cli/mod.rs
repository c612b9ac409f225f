//! Command-line interface for hoslog.
//!
//! This module provides the CLI structure for the `hoslog` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ChartCommand, ChartFormat, ConfigCommand, OutputFormat, PlanCommand, RemarksCommand,
    SheetsCommand,
};

use crate::logging::Verbosity;

/// hoslog - Hours-of-Service daily log charts
///
/// Draws the 24-hour duty-status grid and the remarks list for each day of a
/// trip, the way a paper driver's logbook shows them.
#[derive(Debug, Parser)]
#[command(name = "hoslog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Draw the duty-status chart for one day
    Chart(ChartCommand),

    /// List the remarks for one day
    Remarks(RemarksCommand),

    /// Rebuild daily log sheets from the trip's entries
    Sheets(SheetsCommand),

    /// Plan an hours-of-service compliant schedule for a trip
    Plan(PlanCommand),

    /// View or check configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "hoslog");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chart_defaults() {
        let cli = Cli::try_parse_from(["hoslog", "chart", "trip.json"]).unwrap();
        match cli.command {
            Command::Chart(cmd) => {
                assert_eq!(cmd.trip, PathBuf::from("trip.json"));
                assert_eq!(cmd.day, 0);
                assert_eq!(cmd.format, ChartFormat::Svg);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_chart_with_day_and_format() {
        let cli =
            Cli::try_parse_from(["hoslog", "chart", "trip.json", "-d", "2", "-f", "json"]).unwrap();
        match cli.command {
            Command::Chart(cmd) => {
                assert_eq!(cmd.day, 2);
                assert_eq!(cmd.format, ChartFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_remarks() {
        let cli = Cli::try_parse_from(["hoslog", "remarks", "trip.json", "--format", "json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Remarks(RemarksCommand {
                format: OutputFormat::Json,
                ..
            })
        ));
    }

    #[test]
    fn test_parse_sheets() {
        let cli = Cli::try_parse_from(["hoslog", "sheets", "trip.json", "--distance", "812.4"]).unwrap();
        match cli.command {
            Command::Sheets(cmd) => assert_eq!(cmd.distance, Some(812.4)),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_plan() {
        let cli = Cli::try_parse_from([
            "hoslog",
            "plan",
            "--from",
            "Los Angeles, CA",
            "--pickup",
            "Phoenix, AZ",
            "--dropoff",
            "Dallas, TX",
            "--pickup-miles",
            "372",
            "--dropoff-miles",
            "1065",
            "--cycle-used",
            "12.5",
        ])
        .unwrap();
        match cli.command {
            Command::Plan(cmd) => {
                assert_eq!(cmd.pickup, "Phoenix, AZ");
                assert_eq!(cmd.pickup_hours, None);
                assert_eq!(cmd.cycle_used, 12.5);
                assert!(!cmd.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_plan_requires_locations() {
        assert!(Cli::try_parse_from(["hoslog", "plan", "--pickup-miles", "10"]).is_err());
    }

    #[test]
    fn test_parse_config_path() {
        let cli = Cli::try_parse_from(["hoslog", "config", "path"]).unwrap();
        assert!(matches!(cli.command, Command::Config(ConfigCommand::Path)));
    }

    #[test]
    fn test_parse_with_config_and_verbosity() {
        let cli = Cli::try_parse_from(["hoslog", "-c", "/custom/config.toml", "-vv", "config", "show"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_quiet() {
        let cli = Cli::try_parse_from(["hoslog", "-q", "config", "path"]).unwrap();
        assert_eq!(cli.verbosity(), Verbosity::Quiet);
    }
}
