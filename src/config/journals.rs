use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults::owned;

/// Journal-level configuration: how journal folders map to tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalConfig {
	/// Explicit journal name -> tag mapping. Journals not listed here get a
	/// tag derived from their name.
	#[serde(default = "default_tags")]
	pub tags: BTreeMap<String, String>,

	/// Journal name used when a note path is too shallow to name one
	#[serde(default = "default_fallback_name")]
	pub fallback_name: String,

	/// Top-level folders of the export that are not journals
	#[serde(default = "default_ignored")]
	pub ignored: Vec<String>,
}

fn default_tags() -> BTreeMap<String, String> {
	BTreeMap::from([
		("Work Journal".to_string(), "work".to_string()),
		("Personal".to_string(), "personal".to_string()),
	])
}

fn default_fallback_name() -> String { "Tagebuch".to_string() }

fn default_ignored() -> Vec<String> { owned(&["logs", ".DS_Store"]) }

impl Default for JournalConfig {
	fn default() -> Self {
		Self { tags: default_tags(), fallback_name: default_fallback_name(), ignored: default_ignored() }
	}
}
