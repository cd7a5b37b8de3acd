mod argmin_cmd;
mod cli;
mod config;
mod convert;
mod layout_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Offset(args) => layout_cmd::offset(args, cli.config.as_deref()),
        Command::Pair(args) => layout_cmd::pair(args, cli.config.as_deref()),
        Command::Table(args) => layout_cmd::table(args, cli.config.as_deref()),
        Command::Argmin(args) => argmin_cmd::run(args),
    }
}
