mod cli;
mod config;
mod convert;
mod events;
mod logging;
mod month_cmd;
mod render;
mod window_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::LuachConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LuachConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Month(args) => month_cmd::run(args, &config),
        Command::Year(args) => year_cmd::run(args, &config),
        Command::Window(args) => window_cmd::run(args, &config),
    }
}
