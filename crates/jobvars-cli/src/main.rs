mod cli;
mod commands;
mod config;
mod input;

use clap::Parser;
use tracing::debug;

use jobvars_observe::init_logger;

use crate::{cli::Cli, config::AppConfig};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    // config file < environment < command line
    let logger = config
        .logger
        .clone()
        .with_env_overrides()?
        .with_overrides(cli.log_level.as_deref(), cli.log_format.as_deref())?;
    init_logger(&logger)?;
    debug!(format = %logger.format, level = logger.level.as_str(), "logger initialized");

    let expander = config.expansion.compile()?;
    let vars = input::load_variables(cli.file.as_deref(), &cli.vars)?;
    for line in commands::run(&cli.command, &vars, &expander) {
        println!("{line}");
    }
    Ok(())
}
