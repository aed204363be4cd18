//! Command-line interface for diarly2obsidian.
//!
//! Takes the Diarly export folder and the Obsidian vault folder:
//! `diarly2obsidian <SOURCE> <TARGET>`

use std::path::PathBuf;

use clap::Parser;

/// Main CLI structure parsed by clap.
#[derive(Parser, Debug)]
#[command(name = "diarly2obsidian", version)]
#[command(about = "Convert a Diarly export into Obsidian daily notes", long_about = None)]
pub struct Cli {
	/// Source directory (Diarly export)
	pub source: PathBuf,
	/// Target directory (Obsidian vault)
	pub target: PathBuf,
}
