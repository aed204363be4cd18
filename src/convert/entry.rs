//! Journal, year and date of a note, derived from its path in the export.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::{
	config::{Config, JournalConfig},
	utils::{date_formats, slugify},
};

/// Where a note sits in the export: `<journal>/<year>/<month>-<day>.md`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryPath {
	pub journal: String,
	pub year:    String,
	pub month:   String,
	pub day:     String,
}

impl EntryPath {
	/// `<year>-<month>-<day>` with every part as written in the export.
	pub fn date(&self) -> String { format!("{}-{}-{}", self.year, self.month, self.day) }

	/// File name of the daily note in the vault.
	pub fn file_name(&self) -> String { format!("{}.md", self.date()) }

	/// Whether the date names a real calendar day.
	pub fn is_calendar_date(&self) -> bool { NaiveDate::parse_from_str(&self.date(), date_formats::DATE_ONLY).is_ok() }
}

/// Derives the entry from a path relative to the export root.
///
/// Returns `Ok(None)` for Diarly's welcome note. A file name that is not
/// `<month>-<day>` is an error.
pub fn parse_entry_path(relative: &Path, config: &Config) -> Result<Option<EntryPath>> {
	let stem = relative
		.file_stem()
		.and_then(|s| s.to_str())
		.with_context(|| format!("Invalid note file name: {}", relative.display()))?;

	if stem == config.source.welcome_note {
		return Ok(None);
	}

	let year = relative
		.parent()
		.and_then(Path::file_name)
		.and_then(|s| s.to_str())
		.with_context(|| format!("Note is not inside a year folder: {}", relative.display()))?;

	let journal = if relative.components().count() >= 3 {
		relative
			.components()
			.next()
			.and_then(|c| c.as_os_str().to_str())
			.with_context(|| format!("Invalid journal folder name: {}", relative.display()))?
	} else {
		config.journals.fallback_name.as_str()
	};

	let (month, day) = match stem.split('-').collect::<Vec<_>>()[..] {
		[month, day] => (month, day),
		_ => anyhow::bail!("Malformed note file name '{stem}' in {}: expected <month>-<day>", relative.display()),
	};

	Ok(Some(EntryPath {
		journal: journal.to_string(),
		year:    year.to_string(),
		month:   month.to_string(),
		day:     day.to_string(),
	}))
}

/// Tag for a journal: the configured one if present, else a slug of the name.
pub fn journal_tag(journal: &str, journals: &JournalConfig) -> String {
	match journals.tags.get(journal) {
		Some(tag) => tag.clone(),
		None => slugify(journal),
	}
}
