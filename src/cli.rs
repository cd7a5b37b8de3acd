use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect packed distance-matrix layouts.
#[derive(Parser)]
#[command(
    name = "leafpack",
    version,
    about = "Packed distance-matrix addressing and minimum search"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file providing layout defaults.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the packed offset of a coordinate pair.
    Offset(OffsetArgs),
    /// Print the coordinate pair stored at a packed offset.
    Pair(PairArgs),
    /// Print every pair of a layout with its offset.
    Table(TableArgs),
    /// Print the position of the first minimum of a list of values.
    Argmin(ArgminArgs),
}

/// Layout selection shared by the addressing subcommands.
#[derive(clap::Args, Debug, Default)]
pub struct LayoutArgs {
    /// Number of items (overrides `[layout].n`). Optional for `offset` with
    /// the origin convention, where it only bounds the coordinates.
    #[arg(short, long)]
    pub n: Option<usize>,

    /// Packing convention: `origin` or `row-major` (overrides `[layout].convention`).
    #[arg(long)]
    pub convention: Option<String>,
}

/// Arguments for the `offset` subcommand.
#[derive(clap::Args)]
pub struct OffsetArgs {
    /// First coordinate.
    pub i: usize,
    /// Second coordinate.
    pub j: usize,
    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for the `pair` subcommand.
#[derive(clap::Args)]
pub struct PairArgs {
    /// Linear offset into the packed buffer.
    pub offset: usize,
    #[command(flatten)]
    pub layout: LayoutArgs,
}

/// Arguments for the `table` subcommand.
#[derive(clap::Args)]
pub struct TableArgs {
    #[command(flatten)]
    pub layout: LayoutArgs,

    /// Emit JSON instead of a plain table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `argmin` subcommand.
#[derive(clap::Args)]
pub struct ArgminArgs {
    /// Values to scan.
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// Inclusive start of the range (default 0).
    #[arg(long)]
    pub start: Option<usize>,

    /// Exclusive end of the range (default: number of values).
    #[arg(long)]
    pub end: Option<usize>,
}
