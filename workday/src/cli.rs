use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Working-day calculator for Belgium and the Netherlands.
#[derive(Parser)]
#[command(
    name = "workday",
    version,
    about = "Working-day calculator for Belgium and the Netherlands"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: workday.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Region identifier, overriding the config file (BE-VLG, BE-WAL, BE-BRU, NL).
    #[arg(short, long, global = true)]
    pub region: Option<String>,

    /// Print JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Count working days between two dates, both inclusive.
    Range(RangeArgs),
    /// Find the N-th working day counting forward from a date (inclusive).
    Add(CountArgs),
    /// Find the N-th working day counting backward from a date (inclusive).
    Subtract(CountArgs),
    /// List the holidays of a year as the configuration applies them.
    Holidays(HolidaysArgs),
    /// List the supported regions.
    Regions,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First date (YYYY-MM-DD).
    pub start: String,

    /// Last date (YYYY-MM-DD).
    pub end: String,

    /// Print one line per examined day.
    #[arg(long)]
    pub log: bool,
}

/// Arguments for the `add` and `subtract` subcommands.
#[derive(clap::Args)]
pub struct CountArgs {
    /// Date to count from (YYYY-MM-DD); it counts itself if it is a working day.
    pub start: String,

    /// Number of working days to find.
    #[arg(allow_hyphen_values = true)]
    pub days: String,

    /// Print one line per examined day.
    #[arg(long)]
    pub log: bool,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Year to list [default: the current year].
    #[arg(short, long)]
    pub year: Option<u16>,
}
