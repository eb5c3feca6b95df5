mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod moon_cmd;
mod range_cmd;
mod template_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::LunariaConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LunariaConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Convert(args) => convert_cmd::run_convert(args, &config),
        Command::Inverse(args) => convert_cmd::run_inverse(args, &config),
        Command::Moon(args) => moon_cmd::run(args, &config),
        Command::Range(args) => range_cmd::run(args, &config),
        Command::Template(args) => template_cmd::run(args, &config),
    }
}
