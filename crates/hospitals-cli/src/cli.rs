use crate::utils::parser;
use clap::{Args, Parser, Subcommand};
use hospitals::core::models::cell::Cell;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Hospitals CLI - place hospitals on a grid of houses by hill-climbing local search.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used for parallel restarts.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a single hill climb from a random hospital placement.
    Climb(ClimbArgs),
    /// Run hill climbing repeatedly from random placements and keep the best result.
    Restart(RestartArgs),
}

/// Problem and search parameters shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct GridArgs {
    /// Number of grid rows.
    #[arg(long, value_name = "INT")]
    pub height: Option<usize>,

    /// Number of grid columns.
    #[arg(long, value_name = "INT")]
    pub width: Option<usize>,

    /// Number of hospitals to place.
    #[arg(long, value_name = "INT")]
    pub hospitals: Option<usize>,

    /// Number of houses to scatter at random. Duplicate draws collapse into one house.
    #[arg(long, value_name = "INT", conflicts_with = "house")]
    pub houses: Option<usize>,

    /// Place a house at an explicit cell. Can be used multiple times.
    #[arg(long = "house", value_name = "ROW,COL", value_parser = parser::parse_cell)]
    pub house: Vec<Cell>,

    /// Seed for house generation and search; random when omitted.
    #[arg(long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Stop a hill climb after this many improving moves.
    #[arg(long, value_name = "INT")]
    pub max_iterations: Option<usize>,

    /// Write PNG frames named PREFIX000.png, PREFIX001.png, ...
    #[arg(long, value_name = "PREFIX")]
    pub frames: Option<String>,
}

/// Arguments for the `climb` subcommand.
#[derive(Args, Debug)]
pub struct ClimbArgs {
    #[command(flatten)]
    pub grid: GridArgs,
}

/// Arguments for the `restart` subcommand.
#[derive(Args, Debug)]
pub struct RestartArgs {
    #[command(flatten)]
    pub grid: GridArgs,

    /// Number of independent hill-climbing runs.
    #[arg(short, long, value_name = "INT")]
    pub restarts: Option<usize>,
}
