#![doc = include_str!("../README.md")]

mod cli;

use clap::Parser;
use cli::config::{CliArgs, Config};
use cli::telemetry::init_logging;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = Config::try_from(args)?;

    init_logging()?;
    tracing::debug!(?config, "starting");

    let mut out = std::io::stdout().lock();
    cli::run(&config, &mut out)
}
