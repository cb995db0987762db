//! CLI argument parsing for the fixit-geo binary.

use clap::{Parser, Subcommand};

use crate::types::TravelMode;

#[derive(Parser)]
#[command(name = "fixit-geo", about = "Fixit service-category and provider distance tools")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the canonical category for each input
    Normalize {
        /// Category strings as shown in the UI or typed by a user
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// Check whether each input maps to a canonical category
    Validate {
        #[arg(required = true)]
        inputs: Vec<String>,
    },
    /// List every canonical category name
    Categories,
    /// Distance and travel time between two points
    #[command(allow_negative_numbers = true)]
    Distance {
        from_lat: f64,
        from_lng: f64,
        to_lat: f64,
        to_lng: f64,
        /// driving or walking
        #[arg(long, default_value = "driving")]
        mode: TravelMode,
        /// Print a JSON summary instead of labels
        #[arg(long)]
        json: bool,
    },
    /// Open turn-by-turn directions to a destination
    #[command(allow_negative_numbers = true)]
    Navigate {
        lat: f64,
        lng: f64,
        /// Destination name
        #[arg(long)]
        name: Option<String>,
        /// Print candidate links instead of opening them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show a location in a maps application
    #[command(allow_negative_numbers = true)]
    Show {
        lat: f64,
        lng: f64,
        /// Pin label
        #[arg(long)]
        label: Option<String>,
        #[arg(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_normalize_parses_multiple_inputs() {
        let cli = Cli::parse_from(["fixit-geo", "normalize", "Plumber", "AC Repair"]);
        match cli.command {
            Command::Normalize { inputs } => assert_eq!(inputs, vec!["Plumber", "AC Repair"]),
            _ => panic!("expected normalize"),
        }
    }

    #[test]
    fn test_cli_normalize_requires_input() {
        assert!(Cli::try_parse_from(["fixit-geo", "normalize"]).is_err());
    }

    #[test]
    fn test_cli_distance_accepts_negative_coordinates() {
        let cli = Cli::parse_from([
            "fixit-geo", "distance", "-33.86", "151.2", "-33.87", "151.21", "--mode", "walking",
        ]);
        match cli.command {
            Command::Distance { from_lat, mode, json, .. } => {
                assert_eq!(from_lat, -33.86);
                assert_eq!(mode, TravelMode::Walking);
                assert!(!json);
            }
            _ => panic!("expected distance"),
        }
    }

    #[test]
    fn test_cli_distance_mode_defaults_to_driving() {
        let cli = Cli::parse_from(["fixit-geo", "distance", "6.6", "3.3", "6.7", "3.4"]);
        assert!(matches!(cli.command, Command::Distance { mode: TravelMode::Driving, .. }));
    }

    #[test]
    fn test_cli_navigate_with_name_and_dry_run() {
        let cli = Cli::parse_from(["fixit-geo", "navigate", "6.6", "3.3", "--name", "Depot", "--dry-run"]);
        match cli.command {
            Command::Navigate { name, dry_run, .. } => {
                assert_eq!(name.as_deref(), Some("Depot"));
                assert!(dry_run);
            }
            _ => panic!("expected navigate"),
        }
    }

    #[test]
    fn test_cli_categories_command_parses() {
        let cli = Cli::parse_from(["fixit-geo", "categories"]);
        assert!(matches!(cli.command, Command::Categories));
    }
}
