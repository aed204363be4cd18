use serde::{Deserialize, Serialize};

/// Layout of the Diarly export being read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
	/// Metadata file that must exist at the export root
	#[serde(default = "default_metadata_file")]
	pub metadata_file: String,

	/// File stem of the placeholder note Diarly ships with every journal
	#[serde(default = "default_welcome_note")]
	pub welcome_note: String,

	/// Per-year folder holding the attachments
	#[serde(default = "default_attachments_dir")]
	pub attachments_dir: String,
}

fn default_metadata_file() -> String { "diarly_meta.json".to_string() }

fn default_welcome_note() -> String { "Willkommen bei Diarly 👋".to_string() }

fn default_attachments_dir() -> String { "data".to_string() }

impl Default for SourceConfig {
	fn default() -> Self {
		Self {
			metadata_file:   default_metadata_file(),
			welcome_note:    default_welcome_note(),
			attachments_dir: default_attachments_dir(),
		}
	}
}
