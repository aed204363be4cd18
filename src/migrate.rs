//! Walks a Diarly export and writes the Obsidian vault.
//!
//! Layout read:
//! - `<source>/diarly_meta.json`
//! - `<source>/<journal>/<year>/<month>-<day>.md`
//! - `<source>/<journal>/<year>/data/<file>`
//!
//! Layout written:
//! - `<target>/Daily Notes/<year>/<year>-<month>-<day>.md`
//! - `<target>/Attachments/<year>/<file>`
//! - `<target>/_templates/daily-note-template.md`

use std::{
	fs::{self, DirEntry},
	path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::{
	config::Config,
	convert::{convert_entry, parse_entry_path},
};

/// Written once per run, independent of the notes.
const DAILY_NOTE_TEMPLATE: &str = "---\ndate: {{date}}\ntags: [daily-note]\n---\n\n";

const TEMPLATE_FILE: &str = "daily-note-template.md";

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
	pub journals:    usize,
	pub notes:       usize,
	pub skipped:     usize,
	pub attachments: usize,
}

/// One conversion run from a Diarly export into an Obsidian vault.
pub struct Migrator<'a> {
	source:   PathBuf,
	target:   PathBuf,
	config:   &'a Config,
	/// Contents of the export's metadata file. Only its presence is required.
	metadata: serde_json::Value,
}

impl<'a> Migrator<'a> {
	/// Prepares a run. Fails if the export's metadata file is missing or is
	/// not valid JSON.
	pub fn new(source: impl Into<PathBuf>, target: impl Into<PathBuf>, config: &'a Config) -> Result<Self> {
		let source = source.into();
		let metadata = load_metadata(&source.join(&config.source.metadata_file))?;
		Ok(Self { source, target: target.into(), config, metadata })
	}

	fn daily_notes_dir(&self) -> PathBuf { self.target.join(&self.config.output.daily_notes_dir) }

	fn attachments_dir(&self) -> PathBuf { self.target.join(&self.config.output.attachments_dir) }

	fn templates_dir(&self) -> PathBuf { self.target.join(&self.config.output.templates_dir) }

	/// Converts every journal of the export. Stops at the first error; files
	/// written up to that point are left in place.
	pub fn run(&self) -> Result<MigrationSummary> {
		info!(source = %self.source.display(), target = %self.target.display(), "starting conversion");
		debug!(metadata_keys = metadata_key_count(&self.metadata), "loaded export metadata");

		self.create_directories()?;
		self.write_template()?;

		let mut summary = MigrationSummary::default();
		for journal_dir in sorted_entries(&self.source)? {
			let name = journal_dir.file_name();
			let name = name.to_string_lossy();
			let journal_path = journal_dir.path();
			let ignored = self.config.journals.ignored.iter().any(|i| i.as_str() == name.as_ref());
			if !journal_path.is_dir() || ignored {
				continue;
			}

			info!(journal = %name, "processing journal");
			summary.journals += 1;
			self.process_journal(&journal_path, &mut summary)?;
		}

		info!(
			journals = summary.journals,
			notes = summary.notes,
			skipped = summary.skipped,
			attachments = summary.attachments,
			"conversion complete"
		);
		Ok(summary)
	}

	fn create_directories(&self) -> Result<()> {
		for dir in [self.daily_notes_dir(), self.attachments_dir(), self.templates_dir()] {
			fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;
		}
		Ok(())
	}

	fn write_template(&self) -> Result<()> {
		let path = self.templates_dir().join(TEMPLATE_FILE);
		fs::write(&path, DAILY_NOTE_TEMPLATE).with_context(|| format!("Failed to write {}", path.display()))?;
		debug!(path = %path.display(), "wrote daily note template");
		Ok(())
	}

	fn process_journal(&self, journal_dir: &Path, summary: &mut MigrationSummary) -> Result<()> {
		for year_dir in sorted_entries(journal_dir)? {
			let name = year_dir.file_name();
			let name = name.to_string_lossy();
			let year_path = year_dir.path();
			if !year_path.is_dir() || !is_year(&name) {
				debug!(path = %year_path.display(), "not a year folder, skipping");
				continue;
			}

			info!(year = %name, "processing year");
			for note in sorted_entries(&year_path)? {
				let note_path = note.path();
				if note_path.is_file() && is_note_file(&note.file_name().to_string_lossy()) {
					if self.process_note(&note_path)? {
						summary.notes += 1;
					} else {
						summary.skipped += 1;
					}
				}
			}

			let data_dir = year_path.join(&self.config.source.attachments_dir);
			if data_dir.is_dir() {
				summary.attachments += self.copy_attachments(&data_dir, &name)?;
			}
		}
		Ok(())
	}

	/// Converts and writes one note. Returns `false` when the note was
	/// skipped.
	fn process_note(&self, source_file: &Path) -> Result<bool> {
		let relative = source_file.strip_prefix(&self.source).unwrap_or(source_file);
		let Some(entry) = parse_entry_path(relative, self.config)? else {
			debug!(path = %source_file.display(), "skipping welcome note");
			return Ok(false);
		};
		if !entry.is_calendar_date() {
			warn!(
				path = %source_file.display(),
				date = %entry.date(),
				"note date is not a calendar day, keeping it verbatim"
			);
		}

		let body = fs::read_to_string(source_file)
			.with_context(|| format!("Failed to read note {}", source_file.display()))?;
		let converted = convert_entry(&body, &entry, self.config)
			.with_context(|| format!("Failed to convert note {}", source_file.display()))?;

		let year_dir = self.daily_notes_dir().join(&entry.year);
		fs::create_dir_all(&year_dir).with_context(|| format!("Failed to create {}", year_dir.display()))?;

		let target_file = year_dir.join(entry.file_name());
		fs::write(&target_file, converted.to_markdown())
			.with_context(|| format!("Failed to write {}", target_file.display()))?;

		info!(from = %source_file.display(), to = %target_file.display(), "processed");
		Ok(true)
	}

	/// Copies every file of a year's `data/` folder. Returns how many were
	/// copied.
	fn copy_attachments(&self, data_dir: &Path, year: &str) -> Result<usize> {
		let target_dir = self.attachments_dir().join(year);
		fs::create_dir_all(&target_dir).with_context(|| format!("Failed to create {}", target_dir.display()))?;

		let mut copied = 0;
		for attachment in sorted_entries(data_dir)? {
			let from = attachment.path();
			if !from.is_file() {
				continue;
			}
			let to = target_dir.join(attachment.file_name());
			fs::copy(&from, &to)
				.with_context(|| format!("Failed to copy {} to {}", from.display(), to.display()))?;
			info!(from = %from.display(), to = %to.display(), "copied attachment");
			copied += 1;
		}
		Ok(copied)
	}
}

fn load_metadata(path: &Path) -> Result<serde_json::Value> {
	let raw = fs::read_to_string(path).with_context(|| format!("Failed to read metadata file {}", path.display()))?;
	serde_json::from_str(&raw).with_context(|| format!("Failed to parse metadata file {}", path.display()))
}

fn metadata_key_count(metadata: &serde_json::Value) -> usize { metadata.as_object().map_or(0, |m| m.len()) }

/// Directory entries sorted by name, so runs are reproducible.
fn sorted_entries(dir: &Path) -> Result<Vec<DirEntry>> {
	let mut entries = fs::read_dir(dir)
		.with_context(|| format!("Failed to read directory {}", dir.display()))?
		.collect::<std::io::Result<Vec<_>>>()
		.with_context(|| format!("Failed to read directory {}", dir.display()))?;
	entries.sort_by_key(DirEntry::file_name);
	Ok(entries)
}

fn is_year(name: &str) -> bool { !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) }

fn is_note_file(name: &str) -> bool { !name.starts_with('.') && name.ends_with(".md") }
