mod cli;
mod config;
mod convert;
mod migrate;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use migrate::Migrator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr; `RUST_LOG` overrides the default level.
fn init_tracing() {
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("diarly2obsidian=info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	init_tracing();

	let config = Config::load().context("Failed to load configuration")?;
	config.validate().context("Invalid configuration")?;

	let migrator = Migrator::new(&cli.source, &cli.target, &config).context("Failed to open Diarly export")?;
	migrator.run()?;

	Ok(())
}
