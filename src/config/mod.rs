mod defaults;
mod journals;
mod output;
mod source;

use std::{
	env, fs,
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
pub use journals::JournalConfig;
pub use output::OutputConfig;
use serde::{Deserialize, Serialize};
pub use source::SourceConfig;

/// Configuration for a diarly2obsidian run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
	#[serde(default)]
	pub journals: JournalConfig,
	#[serde(default)]
	pub source:   SourceConfig,
	#[serde(default)]
	pub output:   OutputConfig,
}

impl Config {
	/// Loads configuration from the default config file path.
	/// Falls back to the built-in defaults when no file exists.
	pub fn load() -> Result<Self> {
		let config_path = Self::get_config_path()?;
		if !config_path.exists() {
			tracing::debug!(path = %config_path.display(), "no config file, using defaults");
			return Ok(Self::default());
		}
		Self::load_from(&config_path)
	}

	/// Loads and validates configuration from an explicit path.
	pub fn load_from(path: &Path) -> Result<Self> {
		let config_str = fs::read_to_string(path)
			.with_context(|| format!("Failed to read config file {}", path.display()))?;

		let config: Self = toml::from_str(&config_str).context("Failed to parse config file")?;
		config.validate()?;
		tracing::debug!(path = %path.display(), "loaded config");
		Ok(config)
	}

	/// Returns the platform-specific configuration file path.
	/// Priority order:
	/// 1. $XDG_CONFIG_HOME/diarly2obsidian/config.toml
	/// 2. the platform config dir (~/.config, ~/Library/Application Support,
	///    %APPDATA%)
	pub fn get_config_path() -> Result<PathBuf> {
		let config_dir = if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME") {
			PathBuf::from(xdg_config)
		} else {
			dirs::config_dir().context("Failed to get config directory")?
		};

		Ok(config_dir.join("diarly2obsidian").join("config.toml"))
	}

	/// Validates the configuration values.
	pub fn validate(&self) -> Result<()> {
		let dir_names = [
			("output.daily_notes_dir", &self.output.daily_notes_dir),
			("output.attachments_dir", &self.output.attachments_dir),
			("output.templates_dir", &self.output.templates_dir),
			("source.metadata_file", &self.source.metadata_file),
			("source.attachments_dir", &self.source.attachments_dir),
		];
		for (key, name) in dir_names {
			if !is_plain_name(name) {
				anyhow::bail!("{key} must be a single non-empty path component, got '{name}'");
			}
		}

		if self.output.base_tag.is_empty() {
			anyhow::bail!("output.base_tag must not be empty");
		}
		if !is_valid_tag(&self.output.base_tag) {
			anyhow::bail!("output.base_tag must not contain whitespace, commas or brackets");
		}

		for (journal, tag) in &self.journals.tags {
			if !is_valid_tag(tag) {
				anyhow::bail!("journals.tags.\"{journal}\" must not contain whitespace, commas or brackets");
			}
		}

		if self.journals.fallback_name.is_empty() {
			anyhow::bail!("journals.fallback_name must not be empty");
		}

		Ok(())
	}
}

fn is_plain_name(name: &str) -> bool {
	!name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Tags end up inside a `[a, b]` frontmatter list, so they must not break it.
fn is_valid_tag(tag: &str) -> bool { !tag.contains(|c: char| c.is_whitespace() || matches!(c, ',' | '[' | ']')) }
