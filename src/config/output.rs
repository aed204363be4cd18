use serde::{Deserialize, Serialize};

/// Layout of the generated Obsidian vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
	/// Folder holding `<year>/<date>.md` daily notes
	#[serde(default = "default_daily_notes_dir")]
	pub daily_notes_dir: String,

	/// Folder holding `<year>/<file>` attachments
	#[serde(default = "default_attachments_dir")]
	pub attachments_dir: String,

	/// Folder receiving the daily note template
	#[serde(default = "default_templates_dir")]
	pub templates_dir: String,

	/// Tag every converted note starts with
	#[serde(default = "default_base_tag")]
	pub base_tag: String,
}

fn default_daily_notes_dir() -> String { "Daily Notes".to_string() }

fn default_attachments_dir() -> String { "Attachments".to_string() }

fn default_templates_dir() -> String { "_templates".to_string() }

fn default_base_tag() -> String { "daily-note".to_string() }

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			daily_notes_dir: default_daily_notes_dir(),
			attachments_dir: default_attachments_dir(),
			templates_dir:   default_templates_dir(),
			base_tag:        default_base_tag(),
		}
	}
}
